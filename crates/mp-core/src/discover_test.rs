use super::*;
use std::fs;

fn write_unit(dir: &Path, name: &str, sql: &str) {
    fs::write(dir.join(name), sql).unwrap();
}

#[test]
fn test_discover_sorts_by_version() {
    let temp = tempfile::tempdir().unwrap();
    // Written out of order on purpose; read_dir order is arbitrary anyway.
    write_unit(temp.path(), "002_create_tasks.sql", "SELECT 2;");
    write_unit(temp.path(), "000_bootstrap.sql", "SELECT 0;");
    write_unit(temp.path(), "001_create_projects.sql", "SELECT 1;");

    let units = discover(temp.path()).unwrap();
    let versions: Vec<String> = units.iter().map(|u| u.version.to_string()).collect();
    assert_eq!(versions, vec!["000", "001", "002"]);
    assert_eq!(units[1].description, "create_projects");
    assert_eq!(units[1].statements, "SELECT 1;");
}

#[test]
fn test_discover_empty_dir_is_valid() {
    let temp = tempfile::tempdir().unwrap();
    let units = discover(temp.path()).unwrap();
    assert!(units.is_empty());
}

#[test]
fn test_discover_missing_dir_errors() {
    let temp = tempfile::tempdir().unwrap();
    let err = discover(&temp.path().join("nope")).unwrap_err();
    assert!(matches!(err, CoreError::MigrationsDirNotFound { .. }));
}

#[test]
fn test_discover_rejects_malformed_name() {
    let temp = tempfile::tempdir().unwrap();
    write_unit(temp.path(), "001_create_projects.sql", "SELECT 1;");
    write_unit(temp.path(), "notes.sql", "SELECT 1;");

    let err = discover(temp.path()).unwrap_err();
    match err {
        CoreError::MalformedIdentifier { name, .. } => assert_eq!(name, "notes.sql"),
        other => panic!("expected MalformedIdentifier, got {other:?}"),
    }
}

#[test]
fn test_discover_rejects_non_sql_file() {
    let temp = tempfile::tempdir().unwrap();
    write_unit(temp.path(), "001_readme.md", "hello");

    assert!(matches!(
        discover(temp.path()).unwrap_err(),
        CoreError::MalformedIdentifier { .. }
    ));
}

#[test]
fn test_discover_ignores_dotfiles_and_subdirs() {
    let temp = tempfile::tempdir().unwrap();
    write_unit(temp.path(), "001_create_projects.sql", "SELECT 1;");
    write_unit(temp.path(), ".gitkeep", "");
    fs::create_dir(temp.path().join("archive")).unwrap();

    let units = discover(temp.path()).unwrap();
    assert_eq!(units.len(), 1);
}

#[test]
fn test_discover_keeps_source_path() {
    let temp = tempfile::tempdir().unwrap();
    write_unit(temp.path(), "001_create_projects.sql", "SELECT 1;");

    let units = discover(temp.path()).unwrap();
    assert_eq!(
        units[0].source_path,
        temp.path().join("001_create_projects.sql")
    );
}
