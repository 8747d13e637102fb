//! Exchange schema validation for Logist.
//!
//! Every request sent to a model and every response received back is checked
//! against a fixed, versioned JSON Schema before the rest of the system
//! trusts it. On top of the structural schema, a top-level discriminator
//! rule applies: a request document carries a `request` key, a response
//! document carries a `response` key.
//!
//! # Outcomes
//!
//! Validation failure is an expected result, so every entry point returns a
//! [`SchemaViolation`] as a value and never panics on malformed input:
//!
//! ```text
//! validate_encoded(text)
//!        │
//!        ├─ not JSON ───────────────▶ Err(Parse)
//!        ├─ has "request" ──────────▶ validate_request
//!        ├─ has "response" ─────────▶ validate_response
//!        └─ neither ────────────────▶ Err(NoDiscriminator)
//! ```
//!
//! # Schema lifetime
//!
//! The schema is compiled once into process-wide state (see [`schema`]) and
//! only handed out by shared reference. Call [`init_from_path`] before the
//! first validation to replace the built-in schema.

mod schema;
mod validate;

pub use schema::{ExchangeSchema, init_from_path, schema};
pub use validate::{validate_encoded, validate_request, validate_response};

/// Top-level key identifying a request document.
pub const REQUEST_KEY: &str = "request";
/// Top-level key identifying a response document.
pub const RESPONSE_KEY: &str = "response";

/// Why a document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("schema violation: {0}")]
    Schema(String),

    #[error("missing required top-level key '{0}'")]
    MissingKey(&'static str),

    #[error(
        "document must contain exactly one of 'request' or 'response'; neither 'request' nor 'response' is present"
    )]
    NoDiscriminator,

    #[error("exchange schema unavailable: {0}")]
    SchemaUnavailable(String),
}

/// Errors raised while loading or compiling a schema artifact.
#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("failed to read schema file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("schema is not valid JSON: {0}")]
    Parse(String),

    #[error("schema failed to compile: {0}")]
    Compile(String),

    #[error("exchange schema already initialized")]
    AlreadyInitialized,
}
