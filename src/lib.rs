//! # Sitepack
//!
//! A build-plan resolver for static-site bundling. Sitepack scans a
//! directory of page templates and resolves a complete, immutable
//! description of one bundler run — entries, output naming, loader rules,
//! plugins, dev-server settings — as plain data the bundler consumes.
//!
//! # Architecture: Resolve Once, Then Hand Off
//!
//! ```text
//! sitepack.toml + BuildMode  →  BuildPlan  →  (bundler executes it)
//! ```
//!
//! Plan resolution runs once at process start, synchronously, and the
//! resulting [`plan::BuildPlan`] is never mutated. The bundler's own
//! concerns — module graph resolution, loader execution, CSS
//! transformation, live-reload transport — are out of scope: the plan
//! names those steps, it never performs them. This separation exists for
//! two reasons:
//!
//! - **Testability**: resolution is a pure function of (root, config,
//!   mode) apart from a single template-directory read, so the whole
//!   plan surface is assertable without running a build.
//! - **Debuggability**: `sitepack plan --json` prints exactly what the
//!   bundler will be told, as human-readable JSON.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | Scans the template directory, one page descriptor per template |
//! | [`plan`] | Assembles the full build plan, gating on [`config::BuildMode`] |
//! | [`config`] | `sitepack.toml` loading, defaults, validation |
//! | [`naming`] | Output filename patterns and content fingerprints |
//! | [`assets`] | Asset classification and img/fonts routing |
//! | [`output`] | CLI output formatting for pages, plans, and asset inventories |
//!
//! # Design Decisions
//!
//! ## Explicit Build Mode
//!
//! The development/production switch is a [`config::BuildMode`] value
//! passed into every builder, never read from environment variables or
//! other ambient state. Two resolutions of the same project with the same
//! mode produce the same plan.
//!
//! ## First-Dot Name Splitting
//!
//! Template filenames are split on the first `.`: `home.html` maps to page
//! `home`, and multi-dot names like `home.pug.bak` keep only the first two
//! segments. Extension-less filenames resolve with `extension: None` and a
//! CLI warning rather than an undefined value or a hard failure; see
//! [`pages`] for the full policy.
//!
//! ## Fingerprints Only in Production
//!
//! Development output uses fixed filenames (`js/index.js`, `index.css`) so
//! URLs stay stable across rebuilds; production output embeds SHA-256
//! content fingerprints so caches bust exactly when content changes.

pub mod assets;
pub mod config;
pub mod naming;
pub mod output;
pub mod pages;
pub mod plan;
