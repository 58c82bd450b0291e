//! Configuration file support for the launchpad CLI.
//!
//! Loads optional `launchpad.toml` from the working directory, or an explicit
//! file passed with `--config`. Command-line flags win over file values.
//! Paths inside the file resolve against the file's own directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use launchpad_page::ProjectTab;
use launchpad_page::hooks::LinkConfig;
use serde::Deserialize;
use tracing::{debug, warn};

/// File name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "launchpad.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Document title
    pub title: Option<String>,
    /// Project tab to render
    pub tab: Option<ProjectTab>,
    /// Catalog JSON file; a relative path is relative to the config file
    pub catalog: Option<PathBuf>,
    /// Targets for the page controls
    pub links: LinkConfig,
}

impl LaunchpadConfig {
    /// Load `launchpad.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            debug!("no {} in {}", DEFAULT_CONFIG_FILE, root.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(catalog) = config.catalog.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.catalog = Some(base.join(catalog));
        }
        Ok(config)
    }
}
