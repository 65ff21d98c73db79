//! Persisted ledger records and apply outcomes.

use chrono::{DateTime, Utc};
use mp_core::Version;
use serde::Serialize;

/// One row of the `schema_migrations` table: proof that a change-unit was
/// applied to this store, and when.
///
/// Rows are never deleted under normal operation — the ledger is the audit
/// trail. Re-application refreshes `applied_at` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    /// Version of the applied change-unit (primary key).
    pub version: Version,

    /// Denormalized description, kept for audit readability.
    pub description: String,

    /// When the unit was last (re)applied.
    pub applied_at: DateTime<Utc>,
}

/// Result of a successful apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// First application: a new ledger row was written.
    Applied,
    /// The ledger row already existed; its timestamp was refreshed.
    Reapplied,
}

impl ApplyOutcome {
    /// Short label for log and console output.
    pub fn label(&self) -> &'static str {
        match self {
            ApplyOutcome::Applied => "applied",
            ApplyOutcome::Reapplied => "re-applied",
        }
    }
}
