//! Error types for the ledger component.

use mp_core::{CoreError, ValidationReport};
use mp_store::StoreError;
use thiserror::Error;

/// Ledger errors: discovery/config problems, store failures, or a refusal
/// to apply a structurally invalid history.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Discovery or configuration error from mp-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Target-store error from mp-store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The history failed validation; nothing was applied (L001).
    #[error("[L001] Validation failed with {} finding(s)", .report.findings().len())]
    ValidationFailed { report: ValidationReport },
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
