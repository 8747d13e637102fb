//! Interaction ledger for Logist jobs.
//!
//! Every model exchange of a job is appended to a single JSON document,
//! `<job_dir>/jobHistory.json`, holding an array of [`ExchangeRecord`]s in
//! append order. Aggregate cost and timing statistics are derived on demand.
//!
//! # Concurrency
//!
//! Appends are read-modify-write over the whole file. Two unsynchronized
//! appends to the same job can lose one record, so callers must keep at most
//! one `record_interaction` in flight per job directory. [`JobLock`] (an
//! advisory file lock) and [`Ledger::record_interaction_locked`] make that
//! enforceable across threads and processes. Different jobs never contend.
//!
//! [`ExchangeRecord`]: logist_core::ExchangeRecord

pub mod ledger;
pub mod lock;
pub mod stats;

pub use ledger::Ledger;
pub use lock::JobLock;
pub use stats::HistoryStats;
