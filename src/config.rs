//! Project configuration module.
//!
//! Handles loading and validating `sitepack.toml`. Configuration is sparse:
//! stock defaults cover a conventional project layout, and user config files
//! override only the values they care about. Unknown keys are rejected to
//! catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! template_dir = "src/pages/views"  # One generated page per file in here
//!
//! [entry]
//! index = "./src/index.js"          # Bundle name -> entry module
//!
//! [output]
//! dir = "dist"
//! public_path = "./"
//!
//! [paths]
//! includes_dir = "src/pages/includes"  # HTML partials inlined into templates
//! svg_dir = "src/images/svg"           # SVGs merged into a sprite
//! scripts_exclude = "node_modules"     # Never transpiled
//!
//! [dev_server]
//! public_path = "/"
//! open_page = "index.html"
//! ```
//!
//! ## Build Mode
//!
//! The development/production switch is deliberately *not* part of the
//! config file and never read from ambient environment state. It is an
//! explicit [`BuildMode`] value passed into plan resolution, which keeps
//! every builder a pure function of its inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build variant selector.
///
/// Development favors debuggable output: fixed filenames, source maps, hot
/// reload. Production favors shippable output: fingerprinted filenames,
/// minified styles, no source maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

/// Project configuration loaded from `sitepack.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory of page templates, one generated page per file.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
    /// Entry modules by bundle name.
    pub entry: BTreeMap<String, String>,
    /// Output location settings.
    pub output: OutputConfig,
    /// Source tree layout (partials, sprites, transpile exclusions).
    pub paths: PathsConfig,
    /// Development server settings (ignored by production plans).
    pub dev_server: DevServerConfig,
}

fn default_template_dir() -> String {
    "src/pages/views".to_string()
}

fn default_entry() -> BTreeMap<String, String> {
    BTreeMap::from([("index".to_string(), "./src/index.js".to_string())])
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            entry: default_entry(),
            output: OutputConfig::default(),
            paths: PathsConfig::default(),
            dev_server: DevServerConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Validate config values before plan resolution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.template_dir.is_empty() {
            return Err(ConfigError::Validation(
                "template_dir must not be empty".into(),
            ));
        }
        if self.entry.is_empty() {
            return Err(ConfigError::Validation(
                "entry must name at least one bundle".into(),
            ));
        }
        if self.output.dir.is_empty() {
            return Err(ConfigError::Validation("output.dir must not be empty".into()));
        }
        Ok(())
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the bundler writes into (cleaned at the start of a build).
    pub dir: String,
    /// URL prefix baked into generated asset references.
    pub public_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "dist".to_string(),
            public_path: "./".to_string(),
        }
    }
}

/// Source tree layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// HTML partials in here are inlined into templates rather than
    /// generating pages of their own.
    pub includes_dir: String,
    /// SVGs in here are merged into a single sprite.
    pub svg_dir: String,
    /// Directory excluded from script transpilation.
    pub scripts_exclude: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            includes_dir: "src/pages/includes".to_string(),
            svg_dir: "src/images/svg".to_string(),
            scripts_exclude: "node_modules".to_string(),
        }
    }
}

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevServerConfig {
    /// URL prefix the dev server serves from (usually `/`, not the
    /// relative `./` used for published output).
    pub public_path: String,
    /// Page opened in the browser when the server starts.
    pub open_page: String,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            public_path: "/".to_string(),
            open_page: "index.html".to_string(),
        }
    }
}

/// Load config from `sitepack.toml` in the given directory.
///
/// Falls back to stock defaults when no config file exists. Unknown keys
/// are rejected and the result is validated.
pub fn load_config(root: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = root.join("sitepack.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        ProjectConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `sitepack.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Sitepack Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory of page templates. Every file in here becomes one generated
# HTML page: <name>.html, where <name> is the filename up to its first dot.
template_dir = "src/pages/views"

# ---------------------------------------------------------------------------
# Entry modules, by bundle name
# ---------------------------------------------------------------------------
[entry]
index = "./src/index.js"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Directory the bundler writes into. Cleaned at the start of every build.
dir = "dist"

# URL prefix baked into generated asset references.
public_path = "./"

# ---------------------------------------------------------------------------
# Source tree layout
# ---------------------------------------------------------------------------
[paths]
# HTML partials in here are inlined into templates instead of generating
# pages of their own.
includes_dir = "src/pages/includes"

# SVGs in here are merged into a single sprite.
svg_dir = "src/images/svg"

# Directory excluded from script transpilation.
scripts_exclude = "node_modules"

# ---------------------------------------------------------------------------
# Development server (ignored by production plans)
# ---------------------------------------------------------------------------
[dev_server]
public_path = "/"
open_page = "index.html"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_layout() {
        let config = ProjectConfig::default();
        assert_eq!(config.template_dir, "src/pages/views");
        assert_eq!(config.output.dir, "dist");
        assert_eq!(config.output.public_path, "./");
        assert_eq!(config.entry.get("index").unwrap(), "./src/index.js");
        assert_eq!(config.paths.scripts_exclude, "node_modules");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[output]
dir = "public"
"#;
        let config: ProjectConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.output.dir, "public");
        // Default values preserved
        assert_eq!(config.output.public_path, "./");
        assert_eq!(config.template_dir, "src/pages/views");
    }

    #[test]
    fn parse_entry_map() {
        let toml = r#"
[entry]
index = "./src/index.js"
admin = "./src/admin.js"
"#;
        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.entry.len(), 2);
        assert_eq!(config.entry.get("admin").unwrap(), "./src/admin.js");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.template_dir, "src/pages/views");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("sitepack.toml"),
            r#"
template_dir = "views"

[dev_server]
open_page = "home.html"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.template_dir, "views");
        assert_eq!(config.dev_server.open_page, "home.html");
        // Unspecified values should be defaults
        assert_eq!(config.dev_server.public_path, "/");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sitepack.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = r#"
[output]
dirr = "dist"
"#;
        let result: Result<ProjectConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml = r#"
[outputs]
dir = "dist"
"#;
        let result: Result<ProjectConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn validate_empty_entry_rejected() {
        let mut config = ProjectConfig::default();
        config.entry.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("entry"));
    }

    #[test]
    fn validate_empty_template_dir_rejected() {
        let mut config = ProjectConfig::default();
        config.template_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_output_dir_rejected() {
        let mut config = ProjectConfig::default();
        config.output.dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sitepack.toml"), "template_dir = \"\"").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn build_mode_flags() {
        assert!(BuildMode::Production.is_production());
        assert!(!BuildMode::Development.is_production());
        assert_eq!(BuildMode::Development.as_str(), "development");
        assert_eq!(BuildMode::Production.as_str(), "production");
    }

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: ProjectConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.template_dir, "src/pages/views");
        assert_eq!(config.output.dir, "dist");
        assert_eq!(config.entry.get("index").unwrap(), "./src/index.js");
        assert_eq!(config.paths.includes_dir, "src/pages/includes");
        assert_eq!(config.dev_server.open_page, "index.html");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[entry]"));
        assert!(content.contains("[output]"));
        assert!(content.contains("[paths]"));
        assert!(content.contains("[dev_server]"));
    }
}
