//! Optional TOML configuration for the scoring engine.
//!
//! A hosting layer may drop a `.fairscore.toml` next to (or above) its
//! working directory to override the priority weighting policy:
//!
//! ```toml
//! [weights]
//! severity = 0.40
//! scope = 0.20
//! persistence = 0.15
//! historical = 0.15
//! feasibility = 0.10
//! ```
//!
//! Invalid weights never abort anything: the loader warns and falls back to
//! the default policy, keeping data entry uninterrupted.

use crate::priority::PriorityWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE_NAME: &str = ".fairscore.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FairscoreConfig {
    /// Priority weighting policy override.
    pub weights: Option<PriorityWeights>,
}

/// Parse a config from TOML text, replacing invalid weights with defaults.
pub fn parse_config(contents: &str) -> Result<FairscoreConfig> {
    let mut config: FairscoreConfig =
        toml::from_str(contents).context("failed to parse fairscore config")?;

    if let Some(weights) = &config.weights {
        if let Err(e) = weights.validate() {
            log::warn!("invalid priority weights in config: {}. Using defaults.", e);
            config.weights = Some(PriorityWeights::default());
        }
    }

    Ok(config)
}

fn try_load_from_path(path: &Path) -> Option<FairscoreConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{:#}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Load configuration by searching the current directory and its ancestors
/// for a `.fairscore.toml`, falling back to defaults when none parses.
pub fn load_config() -> FairscoreConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {}. Using default config.", e);
            return FairscoreConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_from_path(&path))
        .unwrap_or_default()
}

static CONFIG: OnceLock<FairscoreConfig> = OnceLock::new();

/// Cached configuration for process-wide use.
pub fn get_config() -> &'static FairscoreConfig {
    CONFIG.get_or_init(load_config)
}

/// The configured priority weights, or the default policy.
pub fn get_priority_weights() -> PriorityWeights {
    get_config().weights.unwrap_or_default()
}
