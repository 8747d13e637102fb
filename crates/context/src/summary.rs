//! History and metrics summarization hook.
//!
//! Only the placeholder is provided. Real summarizers plug in through
//! [`Summarizer`] without changing the context shape.

use logist_core::ExchangeRecord;
use logist_ledger::HistoryStats;

pub const NO_HISTORY: &str = "No history yet.";
pub const NO_METRICS: &str = "No metrics yet.";

/// Condenses ledger data into the two summary fields of a job context.
pub trait Summarizer {
    fn summarize_history(&self, history: &[ExchangeRecord]) -> String;

    fn summarize_metrics(&self, stats: &HistoryStats) -> String;
}

/// Returns the fixed placeholder text regardless of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSummarizer;

impl Summarizer for PlaceholderSummarizer {
    fn summarize_history(&self, _history: &[ExchangeRecord]) -> String {
        NO_HISTORY.to_string()
    }

    fn summarize_metrics(&self, _stats: &HistoryStats) -> String {
        NO_METRICS.to_string()
    }
}
