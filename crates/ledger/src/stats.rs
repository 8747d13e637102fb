//! Aggregate statistics over a job's history.

use logist_core::ExchangeRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Totals across every recorded exchange of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_interactions: usize,
    pub total_cost: f64,
    pub total_time: f64,
    /// Distinct model identifiers seen, in sorted order. A record without a
    /// model contributes the empty string.
    pub models_used: BTreeSet<String>,
    pub avg_cost_per_interaction: f64,
}

impl HistoryStats {
    /// Fold a history into its totals. An empty history yields all zeros.
    pub fn from_records(records: &[ExchangeRecord]) -> Self {
        let mut stats = Self {
            total_interactions: records.len(),
            ..Self::default()
        };

        for record in records {
            stats.total_cost += record.cost;
            stats.total_time += record.execution_time_seconds;
            stats.models_used.insert(record.model.clone());
        }

        if stats.total_interactions > 0 {
            stats.avg_cost_per_interaction = stats.total_cost / stats.total_interactions as f64;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(model: &str, cost: f64, time: f64) -> ExchangeRecord {
        ExchangeRecord::new(model, cost, time, json!({}), json!({}))
    }

    #[test]
    fn empty_history_is_all_zero() {
        let stats = HistoryStats::from_records(&[]);
        assert_eq!(stats.total_interactions, 0);
        assert_eq!(stats.total_cost, 0.0);
        assert_eq!(stats.total_time, 0.0);
        assert!(stats.models_used.is_empty());
        assert_eq!(stats.avg_cost_per_interaction, 0.0);
    }

    #[test]
    fn sums_and_averages() {
        let stats = HistoryStats::from_records(&[record("a", 1.0, 2.0), record("b", 3.0, 4.0)]);
        assert_eq!(stats.total_interactions, 2);
        assert_eq!(stats.total_cost, 4.0);
        assert_eq!(stats.total_time, 6.0);
        assert_eq!(
            stats.models_used,
            BTreeSet::from(["a".to_string(), "b".to_string()])
        );
        assert_eq!(stats.avg_cost_per_interaction, 2.0);
    }

    #[test]
    fn models_are_deduplicated() {
        let stats = HistoryStats::from_records(&[
            record("gpt-4o", 0.5, 1.0),
            record("gpt-4o", 0.5, 1.0),
            record("claude", 0.0, 1.0),
        ]);
        assert_eq!(stats.models_used.len(), 2);
        assert_eq!(stats.total_interactions, 3);
    }

    #[test]
    fn unnamed_model_is_listed_as_empty() {
        let stats = HistoryStats::from_records(&[record("", 1.0, 1.0), record("m", 1.0, 1.0)]);
        assert_eq!(
            stats.models_used,
            BTreeSet::from([String::new(), "m".to_string()])
        );
        assert_eq!(stats.total_interactions, 2);
    }
}
