use super::*;
use std::fs;
use std::path::Path;

fn scaffold(dir: &Path) {
    fs::write(
        dir.join("milepost.yml"),
        "name: project_service\ndatabase:\n  path: \"store.sqlite3\"\n",
    )
    .unwrap();
    fs::create_dir(dir.join("migrations")).unwrap();
    fs::write(
        dir.join("migrations/000_create_projects.sql"),
        "CREATE TABLE IF NOT EXISTS projects (project_id INTEGER PRIMARY KEY, code TEXT UNIQUE);",
    )
    .unwrap();
    fs::write(
        dir.join("migrations/001_create_tasks.sql"),
        "CREATE TABLE IF NOT EXISTS tasks (
             task_id INTEGER PRIMARY KEY,
             project_id INTEGER NOT NULL REFERENCES projects (project_id) ON DELETE CASCADE
         );",
    )
    .unwrap();
}

fn global(dir: &Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: dir.display().to_string(),
        config: None,
        target: None,
        database: None,
    }
}

fn ledger_rows(dir: &Path) -> i64 {
    let conn = rusqlite::Connection::open(dir.join("store.sqlite3")).unwrap();
    conn.query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_up_applies_pending_units() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());

    let args = UpArgs {
        keep_going: false,
        dry_run: false,
    };
    execute(&args, &global(temp.path())).unwrap();

    assert_eq!(ledger_rows(temp.path()), 2);

    // Second run has nothing pending and succeeds.
    execute(&args, &global(temp.path())).unwrap();
    assert_eq!(ledger_rows(temp.path()), 2);
}

#[test]
fn test_up_dry_run_records_nothing() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());

    let args = UpArgs {
        keep_going: false,
        dry_run: true,
    };
    execute(&args, &global(temp.path())).unwrap();

    assert_eq!(ledger_rows(temp.path()), 0);
}

#[test]
fn test_up_refuses_gapped_history() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());
    fs::write(
        temp.path().join("migrations/003_late.sql"),
        "CREATE TABLE IF NOT EXISTS late (id INTEGER);",
    )
    .unwrap();

    let args = UpArgs {
        keep_going: false,
        dry_run: false,
    };
    let err = execute(&args, &global(temp.path())).unwrap_err();
    assert!(err.to_string().contains("Validation failed"));
    assert_eq!(ledger_rows(temp.path()), 0);
}

#[test]
fn test_up_database_override() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());

    let mut g = global(temp.path());
    g.database = Some(temp.path().join("override.sqlite3").display().to_string());

    let args = UpArgs {
        keep_going: false,
        dry_run: false,
    };
    execute(&args, &g).unwrap();

    assert!(temp.path().join("override.sqlite3").exists());
    assert!(!temp.path().join("store.sqlite3").exists());
}
