//! Pending-work computation for one target store.

use mp_core::{ChangeUnit, Version};
use std::collections::BTreeSet;

/// What remains to be done to bring a target store up to date.
#[derive(Debug, Default)]
pub struct Plan {
    /// Discovered units with no ledger entry, ascending by version.
    pub pending: Vec<ChangeUnit>,

    /// Ledger entries whose change-unit is no longer discoverable.
    ///
    /// The historical contract forbids deleting applied units, but the
    /// ledger cannot force that, so orphans are a warning, never fatal.
    pub orphaned: Vec<Version>,
}

impl Plan {
    /// Compute the plan from discovered units and the store's applied set.
    ///
    /// `discovered` is expected sorted ascending, as
    /// [`mp_core::discover`] returns it; pending preserves that order.
    pub fn compute(discovered: Vec<ChangeUnit>, applied: &BTreeSet<Version>) -> Self {
        let discovered_versions: BTreeSet<Version> =
            discovered.iter().map(|u| u.version).collect();

        let pending: Vec<ChangeUnit> = discovered
            .into_iter()
            .filter(|u| !applied.contains(&u.version))
            .collect();

        let orphaned: Vec<Version> = applied
            .iter()
            .filter(|v| !discovered_versions.contains(v))
            .copied()
            .collect();

        Self { pending, orphaned }
    }

    /// True when the store is fully caught up.
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
