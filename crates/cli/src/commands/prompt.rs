//! `logist prompt`: Assemble and render the next prompt.

use anyhow::Context;
use logist_config::LogistConfig;
use logist_context::{
    PlaceholderSummarizer, PromptFormat, assemble_job_context_with_history, render_prompt,
};
use logist_core::{JobManifest, RoleConfig};
use logist_ledger::Ledger;
use std::path::Path;
use tracing::debug;

pub fn run(
    config: &LogistConfig,
    job_dir: &Path,
    role: Option<&Path>,
    format: Option<&str>,
) -> anyhow::Result<()> {
    let format = match format {
        Some(name) => name.parse::<PromptFormat>()?,
        None => config.context.prompt_format(),
    };

    debug!(job_dir = %job_dir.display(), %format, "Rendering prompt");
    let manifest = JobManifest::load(job_dir, &config.context.manifest_file)?;
    let role = match role {
        Some(path) => RoleConfig::from_value(&super::read_json(path)?),
        None => RoleConfig::default(),
    };

    let ledger = Ledger::new(&config.ledger);
    let context = assemble_job_context_with_history(
        job_dir,
        &manifest,
        &role,
        &ledger,
        &PlaceholderSummarizer,
    )
    .context("Failed to assemble job context")?;

    println!("{}", render_prompt(&context, format)?);
    Ok(())
}
