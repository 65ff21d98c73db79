//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mp_core::Config;
use mp_store::SqliteStore;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded config and resolved store path
pub struct RuntimeContext {
    /// Project root directory
    pub root: PathBuf,

    /// The loaded project configuration
    pub config: Config,

    /// Resolved database path (override > named target > default)
    pub db_path: String,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        let db_path = match &args.database {
            Some(path) => path.clone(),
            None => config
                .database_path(args.target.as_deref())
                .context("Failed to resolve target store")?
                .to_string(),
        };

        Ok(Self {
            root,
            config,
            db_path,
            verbose: args.verbose,
        })
    }

    /// Absolute path to the migrations directory
    pub fn migrations_dir(&self) -> PathBuf {
        self.config.migrations_path_absolute(&self.root)
    }

    /// Open the target store, creating parent directories as needed
    pub fn open_store(&self) -> Result<SqliteStore> {
        if self.db_path == ":memory:" {
            return SqliteStore::in_memory().context("Failed to open in-memory store");
        }

        let path = if Path::new(&self.db_path).is_absolute() {
            PathBuf::from(&self.db_path)
        } else {
            self.root.join(&self.db_path)
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        self.verbose(&format!("opening target store at {}", path.display()));
        SqliteStore::from_path(&path)
            .with_context(|| format!("Failed to open target store: {}", path.display()))
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
