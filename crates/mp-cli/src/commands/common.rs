//! Helpers shared between commands

use mp_core::ValidationReport;
use mp_ledger::LedgerError;

/// Print every validation finding, one per line.
pub(crate) fn print_findings(report: &ValidationReport) {
    for finding in report.findings() {
        println!("  ✗ {finding}");
    }
}

/// Turn a ledger error into a CLI failure, expanding validation reports so
/// the user sees every finding, not just a count.
pub(crate) fn fail(err: LedgerError) -> anyhow::Error {
    if let LedgerError::ValidationFailed { report } = &err {
        print_findings(report);
    }
    anyhow::Error::new(err)
}
