//! Job context assembly.
//!
//! A [`JobContext`] always carries every field, including the workspace and
//! summary placeholders, so formatting code never special-cases absence.

use logist_core::{JobManifest, LedgerError, RoleConfig};
use logist_ledger::{HistoryStats, Ledger};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::summary::{NO_HISTORY, NO_METRICS, Summarizer};

/// The derived view of job state used to build the next prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobContext {
    pub job_id: String,
    pub current_phase: String,
    pub role_name: String,
    pub role_instructions: String,
    pub job_description: String,
    /// Workspace files keyed by path. Always empty for now.
    pub workspace_content: serde_json::Map<String, serde_json::Value>,
    pub history_summary: String,
    pub metrics_summary: String,
}

/// Project a manifest and role into a context with placeholder summaries.
pub fn assemble_job_context(
    job_dir: &Path,
    manifest: &JobManifest,
    role: &RoleConfig,
) -> JobContext {
    let context = JobContext {
        job_id: manifest.job_id().to_string(),
        current_phase: manifest.current_phase().to_string(),
        role_name: role.name().to_string(),
        role_instructions: role.instructions().to_string(),
        job_description: manifest.description().to_string(),
        workspace_content: serde_json::Map::new(),
        history_summary: NO_HISTORY.to_string(),
        metrics_summary: NO_METRICS.to_string(),
    };
    debug!(
        job_dir = %job_dir.display(),
        job_id = %context.job_id,
        phase = %context.current_phase,
        role = %context.role_name,
        "Job context assembled"
    );
    context
}

/// Like [`assemble_job_context`], with summaries drawn from the job's ledger.
///
/// Ledger read failures (including corruption) are propagated.
pub fn assemble_job_context_with_history(
    job_dir: &Path,
    manifest: &JobManifest,
    role: &RoleConfig,
    ledger: &Ledger,
    summarizer: &dyn Summarizer,
) -> Result<JobContext, LedgerError> {
    let history = ledger.get_job_history(job_dir, None)?;
    let stats = HistoryStats::from_records(&history);

    let mut context = assemble_job_context(job_dir, manifest, role);
    context.history_summary = summarizer.summarize_history(&history);
    context.metrics_summary = summarizer.summarize_metrics(&stats);
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::PlaceholderSummarizer;
    use logist_core::ExchangeRecord;
    use serde_json::json;

    struct CountingSummarizer;

    impl Summarizer for CountingSummarizer {
        fn summarize_history(&self, history: &[ExchangeRecord]) -> String {
            format!("{} exchanges", history.len())
        }

        fn summarize_metrics(&self, stats: &HistoryStats) -> String {
            format!("${:.2} spent", stats.total_cost)
        }
    }

    #[test]
    fn empty_inputs_yield_defaults() {
        let context = assemble_job_context(
            Path::new("/jobs/none"),
            &JobManifest::default(),
            &RoleConfig::default(),
        );
        assert_eq!(context.job_id, "unknown");
        assert_eq!(context.current_phase, "initial");
        assert_eq!(context.role_name, "unknown_role");
        assert_eq!(context.role_instructions, "No specific instructions.");
        assert_eq!(context.job_description, "A Logist job.");
        assert!(context.workspace_content.is_empty());
        assert_eq!(context.history_summary, "No history yet.");
        assert_eq!(context.metrics_summary, "No metrics yet.");
    }

    #[test]
    fn fields_are_copied_and_renamed() {
        let manifest = JobManifest::from_value(&json!({
            "job_id": "job-42",
            "current_phase": "review",
            "description": "Port the parser",
        }));
        let role = RoleConfig::from_value(&json!({
            "name": "Supervisor",
            "instructions": "Check the evidence.",
        }));
        let context = assemble_job_context(Path::new("/jobs/42"), &manifest, &role);
        assert_eq!(context.job_id, "job-42");
        assert_eq!(context.current_phase, "review");
        assert_eq!(context.job_description, "Port the parser");
        assert_eq!(context.role_name, "Supervisor");
        assert_eq!(context.role_instructions, "Check the evidence.");
    }

    #[test]
    fn placeholders_always_serialized() {
        let context = assemble_job_context(
            Path::new("."),
            &JobManifest::default(),
            &RoleConfig::default(),
        );
        let value = serde_json::to_value(&context).unwrap();
        for key in ["workspace_content", "history_summary", "metrics_summary"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["workspace_content"], json!({}));
    }

    #[test]
    fn history_variant_uses_placeholder_by_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let ledger = Ledger::default();
        ledger
            .record_interaction(dir.path(), json!({}), json!({}), 1.0, "m", 0.5)
            .unwrap();

        let context = assemble_job_context_with_history(
            dir.path(),
            &JobManifest::default(),
            &RoleConfig::default(),
            &ledger,
            &PlaceholderSummarizer,
        )
        .unwrap();
        assert_eq!(context.history_summary, "No history yet.");
        assert_eq!(context.metrics_summary, "No metrics yet.");
    }

    #[test]
    fn history_variant_feeds_summarizer() {
        let dir = tempfile::TempDir::new().unwrap();
        let ledger = Ledger::default();
        for _ in 0..3 {
            ledger
                .record_interaction(dir.path(), json!({}), json!({}), 1.0, "m", 0.5)
                .unwrap();
        }

        let context = assemble_job_context_with_history(
            dir.path(),
            &JobManifest::default(),
            &RoleConfig::default(),
            &ledger,
            &CountingSummarizer,
        )
        .unwrap();
        assert_eq!(context.history_summary, "3 exchanges");
        assert_eq!(context.metrics_summary, "$1.50 spent");
    }

    #[test]
    fn history_variant_propagates_corruption() {
        let dir = tempfile::TempDir::new().unwrap();
        let ledger = Ledger::default();
        std::fs::write(ledger.history_path(dir.path()), "not json").unwrap();

        let err = assemble_job_context_with_history(
            dir.path(),
            &JobManifest::default(),
            &RoleConfig::default(),
            &ledger,
            &PlaceholderSummarizer,
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Corruption { .. }));
    }
}
