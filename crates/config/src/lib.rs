//! Configuration loading, validation, and management for Logist.
//!
//! Loads configuration from `~/.logist/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use logist_core::PromptFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.logist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogistConfig {
    /// Interaction ledger settings
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Schema validator settings
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Context assembly settings
    #[serde(default)]
    pub context: ContextConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// History log file name inside each job directory
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Advisory lock file name inside each job directory
    #[serde(default = "default_lock_file")]
    pub lock_file: String,

    /// Reject negative or non-finite cost / timing values on record
    #[serde(default = "default_true")]
    pub reject_invalid_metrics: bool,
}

fn default_history_file() -> String {
    "jobHistory.json".into()
}
fn default_lock_file() -> String {
    ".jobHistory.lock".into()
}
fn default_true() -> bool {
    true
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            lock_file: default_lock_file(),
            reject_invalid_metrics: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Replace the built-in exchange schema with one loaded from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Prompt format used when the caller does not name one
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Job manifest file name inside each job directory
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
}

fn default_format() -> String {
    PromptFormat::default().to_string()
}
fn default_manifest_file() -> String {
    logist_core::job::MANIFEST_FILE.into()
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            manifest_file: default_manifest_file(),
        }
    }
}

impl ContextConfig {
    /// The configured default format. Only valid after [`LogistConfig::validate`].
    pub fn prompt_format(&self) -> PromptFormat {
        self.default_format.parse().unwrap_or_default()
    }
}

impl LogistConfig {
    /// Load configuration from the default path with env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(file) = std::env::var("LOGIST_HISTORY_FILE") {
            self.ledger.history_file = file;
        }

        if let Ok(path) = std::env::var("LOGIST_SCHEMA_PATH") {
            self.validator.schema_path = Some(PathBuf::from(path));
        }

        if let Ok(format) = std::env::var("LOGIST_PROMPT_FORMAT") {
            self.context.default_format = format;
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".logist")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("ledger.history_file", &self.ledger.history_file),
            ("ledger.lock_file", &self.ledger.lock_file),
            ("context.manifest_file", &self.context.manifest_file),
        ] {
            if !is_plain_file_name(name) {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must be a plain file name, got '{name}'"
                )));
            }
        }

        if self.ledger.history_file == self.ledger.lock_file {
            return Err(ConfigError::ValidationError(
                "ledger.history_file and ledger.lock_file must differ".into(),
            ));
        }

        self.context
            .default_format
            .parse::<PromptFormat>()
            .map_err(|e| ConfigError::ValidationError(format!("context.default_format: {e}")))?;

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
