use super::*;

#[test]
fn test_parse_minimal_config() {
    let yaml = r#"
name: project_service
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.name, "project_service");
    assert_eq!(config.migrations_path, "migrations");
    assert_eq!(config.origin, 0);
    assert_eq!(config.database.path, "target/dev.sqlite3");
    assert!(config.targets.is_empty());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: project_service
version: "2.0.0"
migrations_path: "history"
origin: 1
database:
  path: "target/projects.sqlite3"
targets:
  staging:
    path: "target/staging.sqlite3"
  prod:
    path: "/var/lib/projects/prod.sqlite3"
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.migrations_path, "history");
    assert_eq!(config.origin, 1);
    assert_eq!(config.database.path, "target/projects.sqlite3");
    assert_eq!(config.targets.len(), 2);
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = r#"
name: project_service
migrations: "oops"
"#;
    let result: Result<Config, _> = serde_yaml::from_str(yaml);
    assert!(result.is_err());
}

#[test]
fn test_load_from_dir() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "name: project_service\n",
    )
    .unwrap();

    let config = Config::load_from_dir(temp.path()).unwrap();
    assert_eq!(config.name, "project_service");
}

#[test]
fn test_load_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_rejects_bad_origin() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "name: project_service\norigin: 2\n",
    )
    .unwrap();

    let err = Config::load_from_dir(temp.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_load_rejects_empty_name() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "name: \"\"\n").unwrap();

    assert!(matches!(
        Config::load_from_dir(temp.path()).unwrap_err(),
        CoreError::ConfigInvalid { .. }
    ));
}

#[test]
fn test_origin_version() {
    let yaml = "name: project_service\norigin: 1\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.origin_version().number(), 1);
}

#[test]
fn test_migrations_path_absolute() {
    let config: Config = serde_yaml::from_str("name: project_service\n").unwrap();
    let root = Path::new("/srv/project_service");
    assert_eq!(
        config.migrations_path_absolute(root),
        PathBuf::from("/srv/project_service/migrations")
    );
}

#[test]
fn test_database_path_default_and_target() {
    let yaml = r#"
name: project_service
database:
  path: "target/projects.sqlite3"
targets:
  staging:
    path: "target/staging.sqlite3"
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.database_path(None).unwrap(), "target/projects.sqlite3");
    assert_eq!(
        config.database_path(Some("staging")).unwrap(),
        "target/staging.sqlite3"
    );
}

#[test]
fn test_database_path_unknown_target() {
    let config: Config = serde_yaml::from_str("name: project_service\n").unwrap();
    let err = config.database_path(Some("qa")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}
