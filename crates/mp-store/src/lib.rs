//! mp-store - Target-store layer for Milepost
//!
//! Defines the [`LedgerStore`] seam between the ledger and the relational
//! store being evolved, plus the SQLite implementation. The store executes
//! opaque statement batches and keeps the `schema_migrations` ledger table;
//! it never interprets statement semantics beyond success or failure.

pub mod entry;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use entry::{ApplyOutcome, LedgerEntry};
pub use error::{StoreError, StoreResult};
pub use sqlite::SqliteStore;
pub use traits::LedgerStore;
