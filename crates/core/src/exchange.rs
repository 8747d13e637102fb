//! Exchange records: the unit of durable job history.
//!
//! The `request` and `response` payloads are opaque JSON documents. Their
//! shape is governed by the exchange schema, not by this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded request/response pair between the orchestrator and a model.
///
/// Field names match the on-disk history format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    /// When the ledger recorded this exchange (RFC 3339 on disk).
    pub timestamp: DateTime<Utc>,

    /// Identifier of the model that produced the response.
    #[serde(default)]
    pub model: String,

    /// Cost of the call. Missing values read as zero.
    #[serde(default)]
    pub cost: f64,

    /// Wall time of the call in seconds. Missing values read as zero.
    #[serde(default)]
    pub execution_time_seconds: f64,

    /// What was sent to the model.
    pub request: serde_json::Value,

    /// What the model returned.
    pub response: serde_json::Value,
}

impl ExchangeRecord {
    /// Build a record stamped with the current instant.
    pub fn new(
        model: impl Into<String>,
        cost: f64,
        execution_time_seconds: f64,
        request: serde_json::Value,
        response: serde_json::Value,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            model: model.into(),
            cost,
            execution_time_seconds,
            request,
            response,
        }
    }

    /// Override the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
