//! Prompt output formats.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ContextError;

/// The textual encoding a job context is rendered into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptFormat {
    /// Narrative template for direct model consumption.
    #[default]
    HumanReadable,
    /// The whole context as pretty-printed JSON.
    JsonFiles,
}

impl PromptFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HumanReadable => "human-readable",
            Self::JsonFiles => "json-files",
        }
    }
}

impl std::fmt::Display for PromptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptFormat {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human-readable" => Ok(Self::HumanReadable),
            "json-files" => Ok(Self::JsonFiles),
            other => Err(ContextError::UnsupportedFormat(other.to_string())),
        }
    }
}
