//! # Logist Core
//!
//! Domain types and error definitions shared by the Logist interaction
//! ledger, schema validator, and context assembler. This crate performs no
//! storage I/O of its own beyond reading a job manifest on request.
//!
//! ## Domain Model
//!
//! - [`ExchangeRecord`]: one request/response pair with timing and cost.
//! - [`JobManifest`]: the externally owned description of a job.
//! - [`RoleConfig`]: the active persona driving the model for a phase.

pub mod error;
pub mod exchange;
pub mod job;
pub mod prompt;

// Re-export key types at crate root for ergonomics
pub use error::{ContextError, Error, LedgerError, Result};
pub use exchange::ExchangeRecord;
pub use job::{JobManifest, RoleConfig};
pub use prompt::PromptFormat;
