//! Append and read operations over a job's history log.

use chrono::Utc;
use logist_config::LedgerConfig;
use logist_core::{ExchangeRecord, LedgerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::lock::JobLock;
use crate::stats::HistoryStats;

/// Stateless handle over job history logs.
///
/// Holds only file naming and validation policy; every call reads the
/// current state from disk.
#[derive(Debug, Clone)]
pub struct Ledger {
    history_file: String,
    lock_file: String,
    reject_invalid_metrics: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(&LedgerConfig::default())
    }
}

impl Ledger {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            history_file: config.history_file.clone(),
            lock_file: config.lock_file.clone(),
            reject_invalid_metrics: config.reject_invalid_metrics,
        }
    }

    /// Path of the history log for a job.
    pub fn history_path(&self, job_dir: &Path) -> PathBuf {
        job_dir.join(&self.history_file)
    }

    /// Take the job's exclusive lock, blocking until it is free.
    pub fn lock(&self, job_dir: &Path) -> Result<JobLock, LedgerError> {
        JobLock::acquire(&job_dir.join(&self.lock_file))
    }

    /// Append one exchange to the job's history and persist the whole log.
    ///
    /// Existing history that cannot be parsed is reported as
    /// [`LedgerError::Corruption`] and left untouched on disk. The caller is
    /// responsible for serializing calls per job (see [`Self::lock`]).
    pub fn record_interaction(
        &self,
        job_dir: &Path,
        request: serde_json::Value,
        response: serde_json::Value,
        execution_time_seconds: f64,
        model_used: &str,
        cost_incurred: f64,
    ) -> Result<ExchangeRecord, LedgerError> {
        if self.reject_invalid_metrics {
            check_metric("cost", cost_incurred)?;
            check_metric("execution_time_seconds", execution_time_seconds)?;
        }

        let path = self.history_path(job_dir);
        let mut history = read_history(&path)?;

        // Never stamp earlier than the last record, even if the clock moved back.
        let now = Utc::now();
        let timestamp = history
            .last()
            .map_or(now, |last| last.timestamp.max(now));

        let record = ExchangeRecord::new(
            model_used,
            cost_incurred,
            execution_time_seconds,
            request,
            response,
        )
        .at(timestamp);
        history.push(record.clone());

        write_history(&path, &history)?;
        info!(
            path = %path.display(),
            model = %record.model,
            cost = record.cost,
            execution_time_seconds = record.execution_time_seconds,
            total = history.len(),
            "Interaction recorded"
        );
        Ok(record)
    }

    /// [`Self::record_interaction`] under the job's exclusive lock.
    pub fn record_interaction_locked(
        &self,
        job_dir: &Path,
        request: serde_json::Value,
        response: serde_json::Value,
        execution_time_seconds: f64,
        model_used: &str,
        cost_incurred: f64,
    ) -> Result<ExchangeRecord, LedgerError> {
        let _guard = self.lock(job_dir)?;
        self.record_interaction(
            job_dir,
            request,
            response,
            execution_time_seconds,
            model_used,
            cost_incurred,
        )
    }

    /// The job's history in append order, optionally only the last `limit`.
    pub fn get_job_history(
        &self,
        job_dir: &Path,
        limit: Option<usize>,
    ) -> Result<Vec<ExchangeRecord>, LedgerError> {
        let mut history = read_history(&self.history_path(job_dir))?;
        if let Some(limit) = limit {
            let skip = history.len().saturating_sub(limit);
            history.drain(..skip);
        }
        Ok(history)
    }

    /// Totals over the job's full history.
    pub fn get_history_stats(&self, job_dir: &Path) -> Result<HistoryStats, LedgerError> {
        let history = self.get_job_history(job_dir, None)?;
        Ok(HistoryStats::from_records(&history))
    }
}

fn check_metric(field: &'static str, value: f64) -> Result<(), LedgerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        warn!(field, value, "Rejected interaction metric");
        Err(LedgerError::InvalidMetric { field, value })
    }
}

/// Load the history array. A missing file is an empty history.
fn read_history(path: &Path) -> Result<Vec<ExchangeRecord>, LedgerError> {
    let content = match std::fs::read(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No history log yet");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(LedgerError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    let history: Vec<ExchangeRecord> = serde_json::from_slice(&content).map_err(|e| {
        warn!(path = %path.display(), error = %e, "History log is corrupted");
        LedgerError::Corruption {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    debug!(path = %path.display(), count = history.len(), "History log loaded");
    Ok(history)
}

/// Replace the history file through a sibling temp file and rename, so a
/// failed write never leaves a truncated log behind.
fn write_history(path: &Path, history: &[ExchangeRecord]) -> Result<(), LedgerError> {
    let write_err = |reason: String| LedgerError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let content = serde_json::to_string_pretty(history)
        .map_err(|e| write_err(format!("failed to serialize history: {e}")))?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = std::fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp_path, path));

    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(e.to_string()));
    }
    Ok(())
}
