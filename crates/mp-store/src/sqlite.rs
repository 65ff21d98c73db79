//! SQLite target-store implementation.

use crate::entry::{ApplyOutcome, LedgerEntry};
use crate::error::{StoreError, StoreResult};
use crate::traits::LedgerStore;
use chrono::{DateTime, Utc};
use mp_core::{ChangeUnit, Version};
use rusqlite::{params, Connection};
use std::collections::BTreeSet;
use std::path::Path;

/// DDL for the ledger table. Also shipped as change-unit `000` so the
/// table's creation is part of the recorded history; `IF NOT EXISTS` keeps
/// the two in agreement.
const LEDGER_DDL: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version     TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// SQLite-backed [`LedgerStore`].
///
/// Single-threaded, no `Mutex`: the ledger applies units sequentially and
/// assumes exclusive access to the target for the duration of a run.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path`.
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Connection(format!("{e}: {}", path.display())))?;
        Self::init(conn)
    }

    /// Create an in-memory store. Useful for tests that don't need
    /// persistence.
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::init(conn)
    }

    /// Create from a path string (handles the ":memory:" special case).
    pub fn new(path: &str) -> StoreResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        // Cascades on projects -> tasks / project_members depend on this;
        // SQLite leaves foreign keys off per connection by default.
        conn.execute_batch("PRAGMA foreign_keys = ON")
            .map_err(|e| StoreError::Connection(format!("failed to enable foreign keys: {e}")))?;
        conn.execute_batch(LEDGER_DDL)
            .map_err(|e| StoreError::Connection(format!("failed to create ledger table: {e}")))?;
        Ok(Self { conn })
    }

    /// Borrow the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl LedgerStore for SqliteStore {
    fn apply(&mut self, unit: &ChangeUnit) -> StoreResult<ApplyOutcome> {
        let version = unit.version;

        // Dropping the transaction without commit rolls everything back, so
        // a failed batch leaves neither schema effects nor a ledger row.
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::Transaction(format!("BEGIN failed: {e}")))?;

        tx.execute_batch(&unit.statements)
            .map_err(|e| StoreError::Execution {
                version,
                cause: e.to_string(),
            })?;

        let existed: i64 = tx
            .query_row(
                "SELECT COUNT(*) FROM schema_migrations WHERE version = ?1",
                params![version.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;

        tx.execute(
            "INSERT INTO schema_migrations (version, description, applied_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (version) DO UPDATE SET applied_at = excluded.applied_at",
            params![
                version.to_string(),
                unit.description,
                Utc::now().to_rfc3339()
            ],
        )
        .map_err(|e| StoreError::Query(format!("failed to record change-unit {version}: {e}")))?;

        tx.commit()
            .map_err(|e| StoreError::Transaction(format!("COMMIT failed: {e}")))?;

        let outcome = if existed > 0 {
            ApplyOutcome::Reapplied
        } else {
            ApplyOutcome::Applied
        };
        log::debug!("change-unit {version} {}", outcome.label());
        Ok(outcome)
    }

    fn entries(&self) -> StoreResult<Vec<LedgerEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT version, description, applied_at
                 FROM schema_migrations
                 ORDER BY version",
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            let (version, description, applied_at) =
                row.map_err(|e| StoreError::Query(e.to_string()))?;
            let version = Version::parse(&version).map_err(|e| {
                StoreError::Query(format!("ledger row has invalid version: {e}"))
            })?;
            let applied_at = DateTime::parse_from_rfc3339(&applied_at)
                .map_err(|e| {
                    StoreError::Query(format!(
                        "ledger row {version} has invalid applied_at '{applied_at}': {e}"
                    ))
                })?
                .with_timezone(&Utc);
            entries.push(LedgerEntry {
                version,
                description,
                applied_at,
            });
        }
        Ok(entries)
    }

    fn applied_versions(&self) -> StoreResult<BTreeSet<Version>> {
        Ok(self.entries()?.into_iter().map(|e| e.version).collect())
    }

    fn store_type(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
