//! `logist record`: Validate and append one exchange.

use anyhow::Context;
use logist_config::LogistConfig;
use logist_ledger::Ledger;
use std::path::Path;
use tracing::warn;

/// Inputs for one recorded exchange.
pub struct Exchange<'a> {
    pub request: &'a Path,
    pub response: &'a Path,
    pub model: &'a str,
    pub cost: f64,
    pub time: f64,
}

pub fn run(config: &LogistConfig, job_dir: &Path, exchange: Exchange<'_>) -> anyhow::Result<()> {
    let request = super::read_json(exchange.request)?;
    let response = super::read_json(exchange.response)?;

    logist_validator::validate_request(&request).map_err(|e| {
        warn!(path = %exchange.request.display(), error = %e, "Request failed validation");
        anyhow::anyhow!("Request rejected: {e}")
    })?;
    logist_validator::validate_response(&response).map_err(|e| {
        warn!(path = %exchange.response.display(), error = %e, "Response failed validation");
        anyhow::anyhow!("Response rejected: {e}")
    })?;

    let ledger = Ledger::new(&config.ledger);
    let record = ledger
        .record_interaction_locked(
            job_dir,
            request,
            response,
            exchange.time,
            exchange.model,
            exchange.cost,
        )
        .context("Failed to record interaction")?;

    println!(
        "📝 Recorded {} exchange at {} (cost ${:.6}, {:.2}s)",
        record.model,
        record.timestamp.to_rfc3339(),
        record.cost,
        record.execution_time_seconds
    );
    Ok(())
}
