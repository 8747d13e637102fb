//! Job manifest and role configuration views.
//!
//! Both documents are owned by collaborators outside this workspace (job
//! bootstrap and role management). They are read here as lenient views:
//! a missing field, or a field of the wrong JSON type, simply reads as
//! absent so callers fall back to the documented defaults.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Well-known manifest file name inside a job directory.
pub const MANIFEST_FILE: &str = "job_manifest.json";

pub const DEFAULT_JOB_ID: &str = "unknown";
pub const DEFAULT_PHASE: &str = "initial";
pub const DEFAULT_DESCRIPTION: &str = "A Logist job.";
pub const DEFAULT_ROLE_NAME: &str = "unknown_role";
pub const DEFAULT_ROLE_INSTRUCTIONS: &str = "No specific instructions.";

/// Read-only view of a job manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobManifest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub current_phase: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl JobManifest {
    /// Interpret an arbitrary JSON value as a manifest. Non-objects read as empty.
    pub fn from_value(value: &serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Load the manifest file from a job directory.
    pub fn load(job_dir: &Path, file_name: &str) -> Result<Self> {
        let path = job_dir.join(file_name);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::Manifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| Error::Manifest {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), "Job manifest loaded");
        Ok(Self::from_value(&value))
    }

    pub fn job_id(&self) -> &str {
        self.job_id.as_deref().unwrap_or(DEFAULT_JOB_ID)
    }

    pub fn current_phase(&self) -> &str {
        self.current_phase.as_deref().unwrap_or(DEFAULT_PHASE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// Read-only view of the active role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleConfig {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub instructions: Option<String>,
}

impl RoleConfig {
    /// Interpret an arbitrary JSON value as a role. Non-objects read as empty.
    pub fn from_value(value: &serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ROLE_NAME)
    }

    pub fn instructions(&self) -> &str {
        self.instructions
            .as_deref()
            .unwrap_or(DEFAULT_ROLE_INSTRUCTIONS)
    }
}

/// Accept any JSON value, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = JobManifest::from_value(&json!({}));
        assert_eq!(manifest.job_id(), "unknown");
        assert_eq!(manifest.current_phase(), "initial");
        assert_eq!(manifest.description(), "A Logist job.");
    }

    #[test]
    fn wrong_typed_fields_fall_back() {
        let manifest = JobManifest::from_value(&json!({
            "job_id": 42,
            "current_phase": "review",
            "description": null,
        }));
        assert_eq!(manifest.job_id(), "unknown");
        assert_eq!(manifest.current_phase(), "review");
        assert_eq!(manifest.description(), "A Logist job.");
    }

    #[test]
    fn wrong_typed_role_fields_are_not_passed_through() {
        let role = RoleConfig::from_value(&json!({
            "name": 7,
            "instructions": {"text": "Write the code."},
        }));
        assert_eq!(role, RoleConfig::default());
        assert_eq!(role.name(), "unknown_role");
        assert_eq!(role.instructions(), "No specific instructions.");
    }

    #[test]
    fn non_object_reads_as_empty() {
        let role = RoleConfig::from_value(&json!(["Worker", "instructions"]));
        assert_eq!(role, RoleConfig::default());
        assert_eq!(role.name(), "unknown_role");
        assert_eq!(role.instructions(), "No specific instructions.");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let role = RoleConfig::from_value(&json!({
            "name": "Worker",
            "instructions": "Write the code.",
            "llm_model": "gpt-4o",
        }));
        assert_eq!(role.name(), "Worker");
        assert_eq!(role.instructions(), "Write the code.");
    }

    #[test]
    fn load_reads_manifest_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"job_id":"job-7","current_phase":"implement","status":"RUNNING"}"#,
        )
        .unwrap();
        let manifest = JobManifest::load(dir.path(), MANIFEST_FILE).unwrap();
        assert_eq!(manifest.job_id(), "job-7");
        assert_eq!(manifest.current_phase(), "implement");
    }

    #[test]
    fn load_missing_manifest_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = JobManifest::load(dir.path(), MANIFEST_FILE).unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }
}
