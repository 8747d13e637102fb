//! Job context assembly and prompt formatting.
//!
//! Projects a job manifest, the active role, and (optionally) the job's
//! ledger into a single [`JobContext`], then renders it for the next model
//! call.
//!
//! | Step | Input | Output |
//! |------|-------|--------|
//! | [`assemble_job_context`] | manifest + role | `JobContext` with placeholder summaries |
//! | [`assemble_job_context_with_history`] | manifest + role + ledger | summaries filled by a [`Summarizer`] |
//! | [`format_llm_prompt`] | context + format name | prompt text |
//!
//! Nothing here keeps state between calls.

pub mod assembler;
pub mod format;
pub mod summary;

pub use assembler::{JobContext, assemble_job_context, assemble_job_context_with_history};
pub use format::{format_llm_prompt, render_prompt};
pub use logist_core::PromptFormat;
pub use summary::{NO_HISTORY, NO_METRICS, PlaceholderSummarizer, Summarizer};
