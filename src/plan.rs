//! Build plan assembly.
//!
//! A [`BuildPlan`] is the complete, immutable description of one bundler
//! run: entry points, output naming, source-map policy, loader rules,
//! plugin set, page descriptors, and dev-server settings. It is resolved
//! once at startup from three explicit inputs — project root, config, and
//! [`BuildMode`] — and never mutated afterwards.
//!
//! The plan is data, not execution: it *names* the transpile, stylesheet,
//! and minification steps the bundler will run, it never performs them.
//! That keeps resolution a pure function (modulo the single template
//! directory read) and lets tests assert the whole surface cheaply.
//!
//! ## What the mode gates
//!
//! | Concern | Development | Production |
//! |---------|-------------|------------|
//! | Script output | `js/[name].js` | `js/[name].[hash].js` |
//! | Stylesheet output | `index.css` | `[hash].css` |
//! | Asset output | `[name].[ext]` | `[contenthash].[ext]` |
//! | Source maps | on | off |
//! | Style minifier | absent | appended after prefixer |
//! | Hot reload plugin | present | absent |
//! | Dev server block | present | absent |
//!
//! Everything else — entries, page descriptors, rule set, split-chunks —
//! is identical between modes.

use crate::config::{BuildMode, ConfigError, DevServerConfig, ProjectConfig};
use crate::pages::{self, PageDescriptor, PageError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Page resolution error: {0}")]
    Page(#[from] PageError),
}

/// Output location and naming for one bundler run.
#[derive(Debug, Clone, Serialize)]
pub struct OutputPlan {
    pub dir: String,
    pub public_path: String,
    /// Script bundle filename pattern (see [`crate::naming`] for tokens).
    pub script_filename: String,
}

/// A postprocessing step in the stylesheet pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePostStep {
    /// Vendor-prefix declarations for the configured browser range.
    Prefixer,
    /// Whitespace/identifier minification. Production only.
    Minifier,
}

/// One loader in the stylesheet chain, innermost-first in source order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "loader", rename_all = "snake_case")]
pub enum StyleLoader {
    /// Pull compiled CSS out of the script graph into its own file.
    Extract { source_maps: bool },
    /// Resolve `@import`/`url()` within CSS.
    Css { source_maps: bool },
    /// Run the postprocessing steps.
    Post {
        steps: Vec<StylePostStep>,
        source_maps: bool,
    },
    /// Rewrite relative `url()`s against the original source file.
    ResolveUrl { source_maps: bool },
    /// Compile SCSS. Source maps stay on in every mode: the url rewriter
    /// upstream needs them to locate original files.
    Sass { source_maps: bool },
}

/// A loader rule: which files it claims and what happens to them.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Transpile entry scripts for the configured browser range.
    Scripts {
        extensions: Vec<String>,
        exclude_dir: String,
    },
    /// SCSS compilation and extraction chain.
    Styles { chain: Vec<StyleLoader> },
    /// Raster images and webfonts: emit, fingerprint (production), and
    /// route to `img/` or `fonts/`.
    Assets {
        extensions: Vec<String>,
        filename: String,
        image_route: String,
        font_route: String,
    },
    /// HTML partials inlined into templates, scoped to the includes dir.
    HtmlPartials { include_dir: String },
    /// SVGs merged into a sprite, scoped to the svg dir.
    SvgSprites { include_dir: String },
}

/// A plugin the bundler activates for this run.
///
/// Page generation is not listed here: each entry of [`BuildPlan::pages`]
/// configures one page-generation plugin instance, in order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "plugin", rename_all = "snake_case")]
pub enum Plugin {
    /// Empty the output dir before writing.
    CleanOutputDir,
    /// Write extracted CSS under this filename pattern.
    ExtractStylesheets { filename: String },
    /// Swap changed modules in place without a full reload. Development only.
    HotReload,
}

/// Dev-server settings carried into development plans.
#[derive(Debug, Clone, Serialize)]
pub struct DevServerPlan {
    pub public_path: String,
    pub open_page: String,
}

/// Chunk-splitting policy. Both modes split shared code into common chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitChunks {
    All,
}

/// The complete, immutable description of one bundler run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub mode: BuildMode,
    pub entry: BTreeMap<String, String>,
    pub output: OutputPlan,
    pub source_maps: bool,
    pub split_chunks: SplitChunks,
    /// One generated page per template, in template-directory listing order.
    pub pages: Vec<PageDescriptor>,
    pub rules: Vec<Rule>,
    pub plugins: Vec<Plugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerPlan>,
}

impl BuildPlan {
    /// Resolve the full plan for one bundler run.
    ///
    /// The only filesystem access is the template directory scan; a missing
    /// or unreadable template dir aborts resolution.
    pub fn resolve(
        root: &Path,
        config: &ProjectConfig,
        mode: BuildMode,
    ) -> Result<BuildPlan, PlanError> {
        config.validate()?;

        let pages = pages::resolve_pages(&root.join(&config.template_dir))?;
        let source_maps = !mode.is_production();

        let output = OutputPlan {
            dir: config.output.dir.clone(),
            public_path: config.output.public_path.clone(),
            script_filename: match mode {
                BuildMode::Development => "js/[name].js".to_string(),
                BuildMode::Production => "js/[name].[hash].js".to_string(),
            },
        };

        let stylesheet_filename = match mode {
            BuildMode::Development => "index.css".to_string(),
            BuildMode::Production => "[hash].css".to_string(),
        };

        let rules = vec![
            Rule::Scripts {
                extensions: vec!["js".to_string()],
                exclude_dir: config.paths.scripts_exclude.clone(),
            },
            Rule::Styles {
                chain: style_chain(mode),
            },
            Rule::Assets {
                extensions: crate::assets::IMAGE_EXTENSIONS
                    .iter()
                    .chain(crate::assets::FONT_EXTENSIONS)
                    .map(|e| e.to_string())
                    .collect(),
                filename: match mode {
                    BuildMode::Development => "[name].[ext]".to_string(),
                    BuildMode::Production => "[contenthash].[ext]".to_string(),
                },
                image_route: "img".to_string(),
                font_route: "fonts".to_string(),
            },
            Rule::HtmlPartials {
                include_dir: config.paths.includes_dir.clone(),
            },
            Rule::SvgSprites {
                include_dir: config.paths.svg_dir.clone(),
            },
        ];

        let mut plugins = vec![
            Plugin::CleanOutputDir,
            Plugin::ExtractStylesheets {
                filename: stylesheet_filename,
            },
        ];
        if !mode.is_production() {
            plugins.push(Plugin::HotReload);
        }

        let dev_server = match mode {
            BuildMode::Development => Some(dev_server_plan(&config.dev_server)),
            BuildMode::Production => None,
        };

        Ok(BuildPlan {
            mode,
            entry: config.entry.clone(),
            output,
            source_maps,
            split_chunks: SplitChunks::All,
            pages,
            rules,
            plugins,
            dev_server,
        })
    }

    /// Filename pattern extracted stylesheets are written under.
    pub fn stylesheet_filename(&self) -> &str {
        self.plugins
            .iter()
            .find_map(|p| match p {
                Plugin::ExtractStylesheets { filename } => Some(filename.as_str()),
                _ => None,
            })
            // resolve() always installs the extract plugin
            .unwrap_or("index.css")
    }
}

/// The stylesheet loader chain for a mode, innermost-first.
///
/// The prefixer always runs; the minifier is appended only in production.
/// Every loader's source-map flag follows the mode except the SCSS
/// compiler, which keeps maps on so the url rewriter can do its job.
fn style_chain(mode: BuildMode) -> Vec<StyleLoader> {
    let source_maps = !mode.is_production();
    let mut steps = vec![StylePostStep::Prefixer];
    if mode.is_production() {
        steps.push(StylePostStep::Minifier);
    }
    vec![
        StyleLoader::Extract { source_maps },
        StyleLoader::Css { source_maps },
        StyleLoader::Post { steps, source_maps },
        StyleLoader::ResolveUrl { source_maps },
        StyleLoader::Sass { source_maps: true },
    ]
}

fn dev_server_plan(config: &DevServerConfig) -> DevServerPlan {
    DevServerPlan {
        public_path: config.public_path.clone(),
        open_page: config.open_page.clone(),
    }
}
