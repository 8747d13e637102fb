//! Error types for the Logist domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum; [`Error`] aggregates them.
//!
//! Schema validation failures are deliberately absent here: the validator
//! returns them as values, not faults.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all Logist operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Ledger errors ---
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    // --- Context errors ---
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    // --- Job state errors ---
    #[error("Failed to load job manifest at {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The persisted history exists but is not a valid sequence of records.
    #[error("History log at {path} is corrupted: {reason}")]
    Corruption { path: PathBuf, reason: String },

    /// The updated history could not be persisted.
    #[error("Failed to write history log at {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// The history file exists but could not be read.
    #[error("Failed to read history log at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// A cost or timing value was negative or not finite.
    #[error("Invalid {field}: {value} (must be a finite, non-negative number)")]
    InvalidMetric { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Error)]
pub enum ContextError {
    #[error("Unsupported prompt format: '{0}' (expected 'human-readable' or 'json-files')")]
    UnsupportedFormat(String),

    #[error("Failed to render prompt: {0}")]
    Render(String),
}
