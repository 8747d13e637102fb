//! `logist history` / `logist stats`: Read a job's ledger.

use anyhow::Context;
use logist_config::LogistConfig;
use logist_ledger::Ledger;
use std::path::Path;

pub fn run(config: &LogistConfig, job_dir: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger);
    let history = ledger
        .get_job_history(job_dir, limit)
        .context("Failed to read job history")?;

    if history.is_empty() {
        println!("No interactions recorded for {}", job_dir.display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}

pub fn stats(config: &LogistConfig, job_dir: &Path) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger);
    let stats = ledger
        .get_history_stats(job_dir)
        .context("Failed to read job history")?;

    let models: Vec<&str> = stats
        .models_used
        .iter()
        .map(|m| if m.is_empty() { "(unnamed)" } else { m.as_str() })
        .collect();

    println!("📊 Job History");
    println!("─────────────────────────────────────");
    println!("  Interactions:  {}", stats.total_interactions);
    println!("  Total cost:    ${:.6}", stats.total_cost);
    println!("  Avg cost:      ${:.6}", stats.avg_cost_per_interaction);
    println!("  Total time:    {:.2}s", stats.total_time);
    println!(
        "  Models:        {}",
        if models.is_empty() {
            "(none)".to_string()
        } else {
            models.join(", ")
        }
    );
    Ok(())
}
