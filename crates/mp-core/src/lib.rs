//! mp-core - Core library for Milepost
//!
//! This crate provides the change-unit model, directory discovery, ledger
//! validation, and project configuration shared across all Milepost
//! components. It is pure: nothing here touches a database.

pub mod change_unit;
pub mod config;
pub mod discover;
pub mod error;
pub mod validate;
pub mod version;

pub use change_unit::{parse_file_name, ChangeUnit};
pub use config::{Config, DatabaseConfig, TargetConfig, CONFIG_FILE_NAME};
pub use discover::discover;
pub use error::{CoreError, CoreResult};
pub use validate::{validate, Finding, ValidationReport};
pub use version::{Version, MAX_VERSION, VERSION_WIDTH};
