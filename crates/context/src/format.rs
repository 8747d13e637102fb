//! Prompt rendering.

use logist_core::{ContextError, PromptFormat};

use crate::assembler::JobContext;

/// Render a context in the format named by `format_type`.
///
/// Accepts `"human-readable"` and `"json-files"`; anything else is
/// [`ContextError::UnsupportedFormat`] naming the rejected value.
pub fn format_llm_prompt(context: &JobContext, format_type: &str) -> Result<String, ContextError> {
    let format: PromptFormat = format_type.parse().inspect_err(|_| {
        tracing::warn!(requested = format_type, "Unsupported prompt format requested");
    })?;
    render_prompt(context, format)
}

/// Render a context in an already-parsed format.
pub fn render_prompt(context: &JobContext, format: PromptFormat) -> Result<String, ContextError> {
    match format {
        PromptFormat::HumanReadable => render_narrative(context),
        PromptFormat::JsonFiles => {
            serde_json::to_string_pretty(context).map_err(|e| ContextError::Render(e.to_string()))
        }
    }
}

fn render_narrative(context: &JobContext) -> Result<String, ContextError> {
    let workspace = serde_json::to_string_pretty(&context.workspace_content)
        .map_err(|e| ContextError::Render(e.to_string()))?;

    let prompt = format!(
        "
You are acting as the {role_name} for job '{job_id}'.

Current phase: {phase}

Job description:
{description}

Your instructions:
{instructions}

Workspace content:
{workspace}
",
        role_name = context.role_name,
        job_id = context.job_id,
        phase = context.current_phase,
        description = context.job_description,
        instructions = context.role_instructions,
    );

    Ok(prompt.trim().to_string())
}
