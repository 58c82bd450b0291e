//! # launchpad
//!
//! Renders the token launchpad landing page to a single static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in catalog to stdout
//! launchpad > index.html
//!
//! # Custom catalog, only live projects, written to a file
//! launchpad --catalog catalog.json --tab live --output dist/index.html
//!
//! # Start a catalog from the built-in data
//! launchpad --dump-catalog > catalog.json
//! ```
//!
//! Settings can also come from `launchpad.toml`; flags override it.

mod config;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use config::LaunchpadConfig;
use launchpad_page::hooks::PageHooks;
use launchpad_page::{Catalog, DEFAULT_TITLE, PageOptions, ProjectTab, render_page};

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(about = "Render the token launchpad landing page to static HTML")]
#[command(version)]
struct Args {
    /// Catalog JSON file (default: built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file (default: ./launchpad.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project tab: featured, upcoming, live or ended
    #[arg(long)]
    tab: Option<ProjectTab>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the catalog as JSON instead of rendering the page
    #[arg(long)]
    dump_catalog: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("launchpad v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => LaunchpadConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            LaunchpadConfig::load(&cwd)
        }
    };

    let catalog = match args.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => Catalog::default(),
    };

    let output = if args.dump_catalog {
        catalog.to_json_pretty()?
    } else {
        let options = PageOptions {
            title: args
                .title
                .or(config.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            tab: args.tab.or(config.tab).unwrap_or_default(),
            hooks: PageHooks::from_links(&config.links),
        };
        info!(
            "Rendering {} project(s), {} feature(s), tab {}",
            catalog.projects_for(options.tab).len(),
            catalog.features().len(),
            options.tab
        );
        render_page(&catalog, &options)
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[launchpad] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
