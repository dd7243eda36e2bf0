use clap::{Parser, Subcommand};
use sitepack::config::BuildMode;
use sitepack::plan::BuildPlan;
use sitepack::{assets, config, output, pages};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitepack")]
#[command(about = "Build-plan resolver for static-site bundling")]
#[command(long_about = "\
Build-plan resolver for static-site bundling

Resolves the full configuration of one bundler run from sitepack.toml and
an explicit build mode. Every file in the template directory becomes one
generated HTML page; loader rules, output naming, source maps, and the
stylesheet pipeline are gated on development vs production.

Project structure:

  sitepack.toml                    # Project config (optional)
  src/
  ├── index.js                     # Entry module
  ├── pages/
  │   ├── views/                   # Templates: one generated page each
  │   │   ├── home.html            #   → home.html
  │   │   └── about.html           #   → about.html
  │   └── includes/                # Partials inlined into templates
  ├── images/                      # → dist/img/ (fingerprinted in production)
  │   └── svg/                     # Merged into a sprite
  └── fonts/                       # → dist/fonts/

Run 'sitepack gen-config' to generate a documented sitepack.toml.")]
#[command(version)]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Resolve a production plan (fingerprinted names, minified styles,
    /// no source maps). Default is a development plan.
    #[arg(long, global = true)]
    production: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve templates into page descriptors and list them
    Pages,
    /// Resolve and print the full build plan
    Plan {
        /// Emit the plan as pretty-printed JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Resolve the plan and inventory assets without emitting anything
    Check,
    /// Print a stock sitepack.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mode = if cli.production {
        BuildMode::Production
    } else {
        BuildMode::Development
    };

    match cli.command {
        Command::Pages => {
            let config = config::load_config(&cli.root)?;
            let pages = pages::resolve_pages(&cli.root.join(&config.template_dir))?;
            output::print_pages(&pages, &cli.root);
        }
        Command::Plan { json } => {
            let config = config::load_config(&cli.root)?;
            let plan = BuildPlan::resolve(&cli.root, &config, mode)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            println!("==> Checking {}", cli.root.display());
            let plan = BuildPlan::resolve(&cli.root, &config, mode)?;
            output::print_pages(&plan.pages, &cli.root);
            let exclude = [
                config.output.dir.as_str(),
                config.paths.scripts_exclude.as_str(),
            ];
            let inventory = assets::inventory(&cli.root, mode, &exclude)?;
            output::print_assets(&inventory);
            println!("==> Plan resolves ({} mode)", mode.as_str());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
