//! Template discovery and page resolution.
//!
//! Scans a directory of page templates and produces one [`PageDescriptor`]
//! per template file, mapping each template to the HTML page the bundler's
//! page-generation step will emit for it.
//!
//! ## Template Directory
//!
//! The scan is non-recursive: every regular file directly inside the
//! template directory becomes one page. Subdirectories and hidden files
//! (leading `.`) are skipped.
//!
//! ```text
//! src/pages/views/
//! ├── home.html        → home.html
//! ├── about.html       → about.html
//! └── contact.html     → contact.html
//! ```
//!
//! ## Ordering
//!
//! Descriptors are emitted in directory listing order. No sorting is
//! applied, so the sequence of generated page plugins matches what the
//! filesystem reports.
//!
//! ## Name Splitting
//!
//! A template filename is split on its first `.`: the part before it is the
//! page name, the segment after it is the extension. Later segments of a
//! multi-dot name (`home.pug.bak`) are discarded. A filename with no dot at
//! all yields `extension: None`; the descriptor is still emitted so a
//! stray file never aborts the build, and callers surface it as a warning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("cannot read template directory: {0}")]
    Io(#[from] std::io::Error),
}

/// One generated page: output filename plus the template that produces it.
///
/// Created once per template file at plan-resolution time and never
/// mutated afterwards. The set of descriptors is fixed for the lifetime
/// of a single build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Page name: template filename up to the first `.`.
    pub name: String,
    /// Template extension: the segment after the first `.`, if any.
    ///
    /// `None` means the template filename had no dot at all. Remaining
    /// segments of multi-dot names are not recorded.
    pub extension: Option<String>,
    /// Filename of the generated page: `<name>.html`.
    pub output_filename: String,
    /// Absolute path to the source template.
    pub template: PathBuf,
}

impl PageDescriptor {
    /// Whether the source filename carried a recognizable extension.
    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }
}

/// Split a template filename on its first `.` into (name, extension).
///
/// - `"home.html"` → `("home", Some("html"))`
/// - `"home.pug.bak"` → `("home", Some("pug"))` (trailing segments dropped)
/// - `"README"` → `("README", None)`
fn split_template_name(filename: &str) -> (String, Option<String>) {
    let mut segments = filename.split('.');
    let name = segments.next().unwrap_or_default().to_string();
    let extension = segments.next().map(str::to_string);
    (name, extension)
}

/// Resolve every template in `template_dir` into a [`PageDescriptor`].
///
/// Fails fast if the directory is missing or unreadable; individual
/// oddly-named files never fail (see module docs for the splitting policy).
pub fn resolve_pages(template_dir: &Path) -> Result<Vec<PageDescriptor>, PageError> {
    let mut pages = Vec::new();

    for entry in fs::read_dir(template_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().to_string();
        if filename.starts_with('.') {
            continue;
        }

        let (name, extension) = split_template_name(&filename);
        let template = std::path::absolute(entry.path())?;

        pages.push(PageDescriptor {
            output_filename: format!("{name}.html"),
            name,
            extension,
            template,
        });
    }

    Ok(pages)
}
