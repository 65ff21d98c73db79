//! Structural validation of a discovered change-unit sequence.
//!
//! Validation is pure and never halts early: a single run surfaces every
//! problem so one corrective round-trip is usually enough.

use crate::change_unit::ChangeUnit;
use crate::version::Version;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One structural problem found in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// V001: the same version appears on more than one change-unit.
    DuplicateVersion { version: Version, count: usize },

    /// V002: the sequence skips `expected`; `found` is the next present
    /// version.
    VersionGap { expected: Version, found: Version },

    /// V003: a change-unit's statement batch is empty.
    EmptyChangeUnit { version: Version },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateVersion { version, count } => {
                write!(f, "[V001] Duplicate version {version} ({count} change-units)")
            }
            Finding::VersionGap { expected, found } => {
                write!(f, "[V002] Version gap: expected {expected}, found {found}")
            }
            Finding::EmptyChangeUnit { version } => {
                write!(f, "[V003] Change-unit {version} has no executable statements")
            }
        }
    }
}

/// Accumulated result of [`validate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// True when no findings were recorded.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings, in check order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// Validate `units` against the ledger's structural invariants.
///
/// Checks run in order: duplicate versions (one finding per colliding
/// value), contiguity from `origin` (every gap reported, not just the
/// first), and non-empty statement batches. `units` is expected sorted
/// ascending, as [`crate::discover::discover`] returns it. An empty
/// sequence is clean.
pub fn validate(units: &[ChangeUnit], origin: Version) -> ValidationReport {
    let mut report = ValidationReport::default();

    // (a) duplicates
    let mut occurrences: BTreeMap<Version, usize> = BTreeMap::new();
    for unit in units {
        *occurrences.entry(unit.version).or_default() += 1;
    }
    for (&version, &count) in &occurrences {
        if count > 1 {
            report.push(Finding::DuplicateVersion { version, count });
        }
    }

    // (b) contiguity over the distinct versions
    let mut expected = origin;
    for &version in occurrences.keys() {
        if version < expected {
            // Below the declared origin. Report it, but keep `expected`
            // where it is so the real sequence is still checked.
            report.push(Finding::VersionGap {
                expected,
                found: version,
            });
            continue;
        }
        if version > expected {
            report.push(Finding::VersionGap {
                expected,
                found: version,
            });
        }
        // Resync so later gaps are still reported. At the maximum version
        // there is no successor and nothing left to check.
        match version.next() {
            Ok(next) => expected = next,
            Err(_) => break,
        }
    }

    // (c) payloads
    for unit in units {
        if !unit.has_statements() {
            report.push(Finding::EmptyChangeUnit {
                version: unit.version,
            });
        }
    }

    report
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
