//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: the primary line for
//! every entity is its semantic identity (positional index + name, or
//! source → destination mapping), with filesystem paths shown as secondary
//! context via indented `Template:` lines.
//!
//! # Output Format
//!
//! ## Pages
//!
//! ```text
//! Pages
//! 001 home → home.html
//!     Template: src/pages/views/home.html
//! 002 README → README.html
//!     Template: src/pages/views/README
//!     Warning: no extension in template name
//! ```
//!
//! ## Plan
//!
//! ```text
//! Mode: production
//! Entries
//!     index ← ./src/index.js
//! Output
//!     dist (public path ./)
//!     Scripts: js/[name].[hash].js
//!     Styles: [hash].css
//!     Source maps: off
//! Pages (2)
//! Rules (5)
//!     scripts, styles, assets, html_partials, svg_sprites
//! Plugins
//!     clean_output_dir, extract_stylesheets
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::assets::Asset;
use crate::pages::PageDescriptor;
use crate::plan::{BuildPlan, Plugin, Rule};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

const INDENT: &str = "    ";

/// Render a template path relative to the project root when possible.
fn display_template(template: &Path, root: &Path) -> String {
    template
        .strip_prefix(root)
        .unwrap_or(template)
        .to_string_lossy()
        .to_string()
}

/// Format the resolved page list, one entity per template.
pub fn format_pages(pages: &[PageDescriptor], root: &Path) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            page.name,
            page.output_filename
        ));
        lines.push(format!(
            "{INDENT}Template: {}",
            display_template(&page.template, root)
        ));
        if !page.has_extension() {
            lines.push(format!("{INDENT}Warning: no extension in template name"));
        }
    }
    if pages.is_empty() {
        lines.push("(no templates found)".to_string());
    }
    lines
}

fn rule_name(rule: &Rule) -> &'static str {
    match rule {
        Rule::Scripts { .. } => "scripts",
        Rule::Styles { .. } => "styles",
        Rule::Assets { .. } => "assets",
        Rule::HtmlPartials { .. } => "html_partials",
        Rule::SvgSprites { .. } => "svg_sprites",
    }
}

fn plugin_name(plugin: &Plugin) -> &'static str {
    match plugin {
        Plugin::CleanOutputDir => "clean_output_dir",
        Plugin::ExtractStylesheets { .. } => "extract_stylesheets",
        Plugin::HotReload => "hot_reload",
    }
}

/// Format a one-screen plan summary.
pub fn format_plan(plan: &BuildPlan) -> Vec<String> {
    let mut lines = vec![format!("Mode: {}", plan.mode.as_str())];

    lines.push("Entries".to_string());
    for (name, source) in &plan.entry {
        lines.push(format!("{INDENT}{name} ← {source}"));
    }

    lines.push("Output".to_string());
    lines.push(format!(
        "{INDENT}{} (public path {})",
        plan.output.dir, plan.output.public_path
    ));
    lines.push(format!("{INDENT}Scripts: {}", plan.output.script_filename));
    lines.push(format!("{INDENT}Styles: {}", plan.stylesheet_filename()));
    lines.push(format!(
        "{INDENT}Source maps: {}",
        if plan.source_maps { "on" } else { "off" }
    ));

    lines.push(format!("Pages ({})", plan.pages.len()));

    lines.push(format!("Rules ({})", plan.rules.len()));
    let names: Vec<&str> = plan.rules.iter().map(rule_name).collect();
    lines.push(format!("{INDENT}{}", names.join(", ")));

    lines.push("Plugins".to_string());
    let names: Vec<&str> = plan.plugins.iter().map(plugin_name).collect();
    lines.push(format!("{INDENT}{}", names.join(", ")));

    if let Some(server) = &plan.dev_server {
        lines.push("Dev server".to_string());
        lines.push(format!(
            "{INDENT}serving {} opening {}",
            server.public_path, server.open_page
        ));
    }

    lines
}

/// Format the asset inventory produced by the `check` command.
pub fn format_assets(assets: &[Asset]) -> Vec<String> {
    let mut lines = vec![format!("Assets ({})", assets.len())];
    for asset in assets {
        match &asset.routed {
            Some(dest) => lines.push(format!("{INDENT}{} → {}", asset.source_path, dest)),
            None => lines.push(format!(
                "{INDENT}{} → (unrouted: not under images/ or fonts/)",
                asset.source_path
            )),
        }
    }
    lines
}

pub fn print_pages(pages: &[PageDescriptor], root: &Path) {
    for line in format_pages(pages, root) {
        println!("{line}");
    }
}

pub fn print_plan(plan: &BuildPlan) {
    for line in format_plan(plan) {
        println!("{line}");
    }
}

pub fn print_assets(assets: &[Asset]) {
    for line in format_assets(assets) {
        println!("{line}");
    }
}
