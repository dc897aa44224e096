//! Project configuration
//!
//! Loads optional configuration from a `crosstalk.toml` next to the input
//! file:
//!
//! ```toml
//! # crosstalk.toml
//! sentinel_users = ["[deleted]", "[removed]"]
//! output_prefix = "crosstalk"
//! default_format = "csv"
//! ```
//!
//! A discovered file that fails to parse logs a warning and falls back to
//! defaults; a path passed explicitly must load cleanly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name looked up next to the input
pub const CONFIG_FILE: &str = "crosstalk.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Author values treated as deleted/anonymous and excluded from tracking
    pub sentinel_users: Vec<String>,
    /// Prefix for generated CSV file names
    pub output_prefix: String,
    /// Format used when the CLI does not specify one
    pub default_format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            sentinel_users: crate::ingest::DEFAULT_SENTINELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            output_prefix: "crosstalk".to_string(),
            default_format: "csv".to_string(),
        }
    }
}

fn load_toml(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

/// Load configuration for a run.
///
/// `explicit` is the `--config` argument; errors there are fatal. Otherwise
/// `crosstalk.toml` is looked up in `search_dir` and a broken file only
/// warns.
pub fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        let config = load_toml(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let discovered = search_dir.join(CONFIG_FILE);
    if discovered.exists() {
        match load_toml(&discovered) {
            Ok(config) => {
                debug!("Loaded config from {}", discovered.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", discovered.display(), e);
            }
        }
    }
    Ok(ProjectConfig::default())
}
