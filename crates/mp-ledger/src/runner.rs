//! Sequential apply runner.

use crate::error::{LedgerError, LedgerResult};
use crate::plan::Plan;
use mp_core::{discover, validate, Version};
use mp_store::{ApplyOutcome, LedgerStore, StoreError};
use std::path::Path;
use std::time::Instant;

/// What to do when a change-unit fails to apply.
///
/// Prior units stay committed either way; the policy only decides whether
/// the rest of the batch still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the batch at the first failure (default).
    #[default]
    Halt,
    /// Record the failure and keep applying later units.
    KeepGoing,
}

/// Outcome of one pending unit within a run.
#[derive(Debug)]
pub struct UnitResult {
    pub version: Version,
    pub description: String,
    pub outcome: Result<ApplyOutcome, StoreError>,
    pub duration_ms: u128,
}

/// Summary of one migration run against one target store.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-unit results, in apply order.
    pub results: Vec<UnitResult>,
    /// Units left untouched after a halting failure.
    pub skipped: usize,
    /// Ledger entries with no matching change-unit file.
    pub orphaned: Vec<Version>,
}

impl RunReport {
    pub fn applied_count(&self) -> usize {
        self.count(ApplyOutcome::Applied)
    }

    pub fn reapplied_count(&self) -> usize {
        self.count(ApplyOutcome::Reapplied)
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_err()).count()
    }

    /// True when every attempted unit succeeded.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    fn count(&self, outcome: ApplyOutcome) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(&r.outcome, Ok(o) if *o == outcome))
            .count()
    }
}

/// Drives a target store through the pending change-units, one at a time,
/// in strict version order.
pub struct Runner {
    origin: Version,
    policy: ErrorPolicy,
}

impl Runner {
    pub fn new(origin: Version, policy: ErrorPolicy) -> Self {
        Self { origin, policy }
    }

    /// Discover and validate the history, then compute the plan for
    /// `store`. Refuses with `ValidationFailed` on a dirty report, so no
    /// statement ever executes against a structurally broken history.
    pub fn plan(&self, store: &dyn LedgerStore, dir: &Path) -> LedgerResult<Plan> {
        let discovered = discover(dir)?;
        let report = validate(&discovered, self.origin);
        if !report.is_clean() {
            return Err(LedgerError::ValidationFailed { report });
        }
        let applied = store.applied_versions()?;
        Ok(Plan::compute(discovered, &applied))
    }

    /// Apply everything pending. An interrupted or failed run leaves the
    /// ledger valid and resumable: completed units have entries, the failed
    /// one does not.
    pub fn run(&self, store: &mut dyn LedgerStore, dir: &Path) -> LedgerResult<RunReport> {
        let plan = self.plan(&*store, dir)?;

        for version in &plan.orphaned {
            log::warn!("ledger entry {version} has no matching change-unit file");
        }

        let total = plan.pending.len();
        let mut report = RunReport {
            orphaned: plan.orphaned,
            ..Default::default()
        };

        for (index, unit) in plan.pending.into_iter().enumerate() {
            log::debug!("applying change-unit {} ({})", unit.version, unit.description);
            let start = Instant::now();
            let outcome = store.apply(&unit);
            let failed = outcome.is_err();

            report.results.push(UnitResult {
                version: unit.version,
                description: unit.description,
                outcome,
                duration_ms: start.elapsed().as_millis(),
            });

            if failed && self.policy == ErrorPolicy::Halt {
                report.skipped = total - index - 1;
                break;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
