//! Asset classification and routing.
//!
//! Static assets (raster images and webfonts) are emitted by the bundler
//! under kind-specific subdirectories of the output dir:
//!
//! ```text
//! src/images/hero.jpg   → dist/img/hero.jpg          (development)
//! src/images/hero.jpg   → dist/img/<digest>.jpg      (production)
//! src/fonts/body.woff2  → dist/fonts/body.woff2      (development)
//! ```
//!
//! Routing is by source path: anything under an `images` directory goes to
//! `img/`, anything under a `fonts` directory goes to `fonts/`. Assets that
//! live under neither stay unrouted (`None`) — the plan makes that case
//! explicit instead of leaving the destination undefined.

use crate::config::BuildMode;
use crate::naming;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions handled by the asset rule (raster images).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Extensions handled by the asset rule (webfonts).
pub const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "ttf"];

/// What kind of asset a file is, as decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Font,
}

/// Classify a file by extension. `None` for anything the asset rule
/// doesn't handle.
pub fn classify(path: &Path) -> Option<AssetKind> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetKind::Image)
    } else if FONT_EXTENSIONS.contains(&ext.as_str()) {
        Some(AssetKind::Font)
    } else {
        None
    }
}

/// Output filename for an asset in the given mode.
///
/// Development keeps the source name so dev-tools stay readable; production
/// uses the content fingerprint so the URL changes with the content.
pub fn output_name(source: &Path, mode: BuildMode, digest: &str) -> String {
    let name = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let pattern = match mode {
        BuildMode::Development => "[name].[ext]",
        BuildMode::Production => "[contenthash].[ext]",
    };
    naming::expand_pattern(
        pattern,
        &naming::PatternVars {
            name: &name,
            ext: &ext,
            hash: digest,
        },
    )
}

/// Route an emitted asset to its output subdirectory by source path.
///
/// Returns `None` when the source lives under neither an `images` nor a
/// `fonts` directory.
pub fn route(source: &Path, emitted_name: &str) -> Option<String> {
    let has_component = |needle: &str| {
        source
            .components()
            .any(|c| c.as_os_str().to_string_lossy() == needle)
    };
    if has_component("images") {
        Some(format!("img/{emitted_name}"))
    } else if has_component("fonts") {
        Some(format!("fonts/{emitted_name}"))
    } else {
        None
    }
}

/// One discovered asset with its resolved destination.
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    pub source_path: String,
    pub kind: AssetKind,
    /// Destination relative to the output dir. `None` for unrouted assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routed: Option<String>,
}

/// Walk a source tree and inventory every asset the asset rule would emit.
///
/// Used by the `check` command to show where assets will land before a
/// build runs. Fingerprints are computed here so the inventory shows the
/// exact production names. Hidden directories and names in `exclude`
/// (output dir, dependency dir) are skipped.
pub fn inventory(root: &Path, mode: BuildMode, exclude: &[&str]) -> std::io::Result<Vec<Asset>> {
    let mut assets = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        !(name.starts_with('.') && e.depth() > 0) && !exclude.contains(&name.as_ref())
    }) {
        let entry = entry.map_err(std::io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = classify(entry.path()) else {
            continue;
        };
        let digest = match mode {
            BuildMode::Production => naming::file_digest(entry.path())?,
            BuildMode::Development => String::new(),
        };
        let emitted = output_name(entry.path(), mode, &digest);
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        assets.push(Asset {
            source_path: rel.to_string_lossy().to_string(),
            kind,
            routed: route(rel, &emitted),
        });
    }
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classify_by_extension() {
        assert_eq!(classify(Path::new("a/hero.jpg")), Some(AssetKind::Image));
        assert_eq!(classify(Path::new("a/hero.JPEG")), Some(AssetKind::Image));
        assert_eq!(classify(Path::new("a/body.woff2")), Some(AssetKind::Font));
        assert_eq!(classify(Path::new("a/app.js")), None);
        assert_eq!(classify(Path::new("a/LICENSE")), None);
    }

    #[test]
    fn dev_name_keeps_source_name() {
        let name = output_name(Path::new("src/images/hero.jpg"), BuildMode::Development, "");
        assert_eq!(name, "hero.jpg");
    }

    #[test]
    fn production_name_is_fingerprint() {
        let name = output_name(
            Path::new("src/images/hero.jpg"),
            BuildMode::Production,
            "deadbeef",
        );
        assert_eq!(name, "deadbeef.jpg");
    }

    #[test]
    fn images_route_to_img() {
        let routed = route(Path::new("src/images/hero.jpg"), "hero.jpg");
        assert_eq!(routed.as_deref(), Some("img/hero.jpg"));
    }

    #[test]
    fn fonts_route_to_fonts() {
        let routed = route(Path::new("src/fonts/body.woff2"), "body.woff2");
        assert_eq!(routed.as_deref(), Some("fonts/body.woff2"));
    }

    #[test]
    fn other_locations_are_unrouted() {
        assert_eq!(route(Path::new("src/misc/data.png"), "data.png"), None);
    }

    #[test]
    fn route_matches_whole_components_only() {
        // "my-images" is not an images directory
        assert_eq!(route(Path::new("src/my-images/a.png"), "a.png"), None);
    }

    #[test]
    fn inventory_finds_and_routes_assets() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/images")).unwrap();
        fs::create_dir_all(tmp.path().join("src/fonts")).unwrap();
        fs::write(tmp.path().join("src/images/hero.jpg"), "jpg bytes").unwrap();
        fs::write(tmp.path().join("src/fonts/body.woff2"), "font bytes").unwrap();
        fs::write(tmp.path().join("src/index.js"), "code").unwrap();

        let assets = inventory(tmp.path(), BuildMode::Development, &["node_modules"]).unwrap();
        assert_eq!(assets.len(), 2);

        let hero = assets.iter().find(|a| a.source_path.contains("hero")).unwrap();
        assert_eq!(hero.kind, AssetKind::Image);
        assert_eq!(hero.routed.as_deref(), Some("img/hero.jpg"));
    }

    #[test]
    fn inventory_skips_excluded_and_hidden_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("dist/img")).unwrap();
        fs::create_dir_all(tmp.path().join(".git")).unwrap();
        fs::create_dir_all(tmp.path().join("src/images")).unwrap();
        fs::write(tmp.path().join("dist/img/old.png"), "stale").unwrap();
        fs::write(tmp.path().join(".git/blob.png"), "noise").unwrap();
        fs::write(tmp.path().join("src/images/hero.png"), "fresh").unwrap();

        let assets = inventory(tmp.path(), BuildMode::Development, &["dist"]).unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets[0].source_path.contains("hero"));
    }

    #[test]
    fn production_inventory_uses_fingerprints() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("images")).unwrap();
        fs::write(tmp.path().join("images/hero.jpg"), "jpg bytes").unwrap();

        let assets = inventory(tmp.path(), BuildMode::Production, &[]).unwrap();
        let routed = assets[0].routed.as_deref().unwrap();
        assert!(routed.starts_with("img/"));
        assert!(routed.ends_with(".jpg"));
        assert!(!routed.contains("hero"));
    }
}
