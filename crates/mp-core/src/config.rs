//! Configuration types and parsing for milepost.yml

use crate::error::{CoreError, CoreResult};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "milepost.yml";

/// Main project configuration from milepost.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing change-unit files, relative to the project root
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,

    /// First version of the history (0 or 1)
    #[serde(default)]
    pub origin: u16,

    /// Default database connection
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Named target stores (e.g., dev, staging, prod). Each target owns an
    /// independent database and ledger; they never share state.
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:"
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Per-target overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Database path for this target
    pub path: String,
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParse {
                message: format!("{}: {e}", path.display()),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `milepost.yml` in the given directory
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Check semantic constraints that serde cannot express
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "project name must not be empty".to_string(),
            });
        }
        if self.origin > 1 {
            return Err(CoreError::ConfigInvalid {
                message: format!("origin must be 0 or 1, got {}", self.origin),
            });
        }
        Ok(())
    }

    /// The declared first version of the history
    pub fn origin_version(&self) -> Version {
        // validate() guarantees origin is 0 or 1
        Version::new(self.origin).unwrap_or_else(|_| unreachable!())
    }

    /// Absolute path to the migrations directory
    pub fn migrations_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_path)
    }

    /// Resolve the database path for an optional named target
    pub fn database_path(&self, target: Option<&str>) -> CoreResult<&str> {
        match target {
            None => Ok(&self.database.path),
            Some(name) => self
                .targets
                .get(name)
                .map(|t| t.path.as_str())
                .ok_or_else(|| CoreError::ConfigInvalid {
                    message: format!("unknown target '{name}'"),
                }),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_migrations_path() -> String {
    "migrations".to_string()
}

fn default_database_path() -> String {
    "target/dev.sqlite3".to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
