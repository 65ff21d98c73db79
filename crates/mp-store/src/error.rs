//! Error types for the target-store layer.

use mp_core::Version;
use thiserror::Error;

/// Target-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the target store (S001).
    #[error("[S001] Store connection failed: {0}")]
    Connection(String),

    /// A change-unit's statement batch was rejected by the store (S002).
    #[error("[S002] Change-unit {version} failed: {cause}")]
    Execution { version: Version, cause: String },

    /// Transaction management error (S003).
    #[error("[S003] Store transaction failed: {0}")]
    Transaction(String),

    /// Reading or writing the ledger table failed (S004).
    #[error("[S004] Ledger query failed: {0}")]
    Query(String),

    /// SQLite driver error with preserved source chain (S005).
    #[error("[S005] SQLite error")]
    Sqlite(#[source] rusqlite::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}
