//! Subcommand implementations.

pub mod config;
pub mod history;
pub mod prompt;
pub mod record;
pub mod validate;

use anyhow::Context;
use logist_config::LogistConfig;
use std::path::Path;
use tracing::{debug, info};

/// Load config and install the schema override, if one is configured.
pub fn load_config() -> anyhow::Result<LogistConfig> {
    let config = LogistConfig::load().context("Failed to load config")?;
    if let Some(path) = &config.validator.schema_path {
        logist_validator::init_from_path(path)
            .with_context(|| format!("Failed to load schema from {}", path.display()))?;
        info!(path = %path.display(), "Using exchange schema override");
    }
    Ok(config)
}

/// Read a JSON document from disk.
pub fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "Read JSON document");
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
