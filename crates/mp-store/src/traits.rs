//! Ledger store trait definition

use crate::entry::{ApplyOutcome, LedgerEntry};
use crate::error::StoreResult;
use mp_core::{ChangeUnit, Version};
use std::collections::BTreeSet;

/// Target-store abstraction for the ledger.
///
/// Implementations guarantee the `schema_migrations` ledger table exists
/// from the moment the store is constructed, so reads on a fresh store are
/// valid. One store value corresponds to one target database; independent
/// targets share no state.
pub trait LedgerStore {
    /// Execute the unit's statement batch and write/refresh its ledger
    /// entry as a single atomic unit of work.
    ///
    /// On failure nothing is recorded and any partial statement effects are
    /// rolled back by the store's transaction. The unit is deliberately NOT
    /// checked for prior application first: re-running is a visible
    /// operation and relies on the author's idempotency contract.
    fn apply(&mut self, unit: &ChangeUnit) -> StoreResult<ApplyOutcome>;

    /// All ledger entries, ascending by version.
    fn entries(&self) -> StoreResult<Vec<LedgerEntry>>;

    /// Versions with a ledger entry. Used to compute the pending set.
    fn applied_versions(&self) -> StoreResult<BTreeSet<Version>>;

    /// Store type identifier for logging.
    fn store_type(&self) -> &'static str;
}
