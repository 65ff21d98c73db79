use super::*;
use std::path::Path;

fn scaffold(dir: &Path) {
    fs::write(dir.join("milepost.yml"), "name: project_service\n").unwrap();
    fs::create_dir(dir.join("migrations")).unwrap();
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

#[test]
fn test_new_starts_at_origin() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());

    let args = NewArgs {
        description: "create_projects".to_string(),
    };
    execute(&args, &global(temp.path())).unwrap();

    let path = temp.path().join("migrations/000_create_projects.sql");
    assert!(path.exists());
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("000_create_projects.sql"));
}

#[test]
fn test_new_increments_from_last_version() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());
    fs::write(
        temp.path().join("migrations/000_a.sql"),
        "CREATE TABLE IF NOT EXISTS a (id INTEGER);",
    )
    .unwrap();
    fs::write(
        temp.path().join("migrations/001_b.sql"),
        "CREATE TABLE IF NOT EXISTS b (id INTEGER);",
    )
    .unwrap();

    let args = NewArgs {
        description: "add_due_dates".to_string(),
    };
    execute(&args, &global(temp.path())).unwrap();

    assert!(temp.path().join("migrations/002_add_due_dates.sql").exists());
}

#[test]
fn test_new_respects_origin_one() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("milepost.yml"),
        "name: project_service\norigin: 1\n",
    )
    .unwrap();
    fs::create_dir(temp.path().join("migrations")).unwrap();

    let args = NewArgs {
        description: "create_projects".to_string(),
    };
    execute(&args, &global(temp.path())).unwrap();

    assert!(temp.path().join("migrations/001_create_projects.sql").exists());
}

#[test]
fn test_new_rejects_invalid_slug() {
    let temp = tempfile::tempdir().unwrap();
    scaffold(temp.path());

    let args = NewArgs {
        description: "CreateProjects".to_string(),
    };
    assert!(execute(&args, &global(temp.path())).is_err());
    assert!(fs::read_dir(temp.path().join("migrations"))
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn test_new_creates_missing_migrations_dir() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("milepost.yml"), "name: project_service\n").unwrap();

    let args = NewArgs {
        description: "create_projects".to_string(),
    };
    execute(&args, &global(temp.path())).unwrap();

    assert!(temp.path().join("migrations/000_create_projects.sql").exists());
}
