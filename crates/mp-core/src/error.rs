//! Error types for mp-core

use thiserror::Error;

/// Core error type for Milepost
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Change-unit file name violates the naming contract
    #[error("[C001] Malformed change-unit name '{name}': {reason}")]
    MalformedIdentifier { name: String, reason: String },

    /// C002: Configuration file not found
    #[error("[C002] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C003: Failed to parse configuration file
    #[error("[C003] Failed to parse config: {message}")]
    ConfigParse { message: String },

    /// C004: Invalid configuration value
    #[error("[C004] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C005: Migrations directory not found
    #[error("[C005] Migrations directory not found: {path}")]
    MigrationsDirNotFound { path: String },

    /// C006: IO error
    #[error("[C006] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// C007: IO error with file path context
    #[error("[C007] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C008: Config YAML parse error
    #[error("[C008] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// C010: Version identifier could not be parsed
    #[error("[C010] Invalid version '{raw}': {reason}")]
    InvalidVersion { raw: String, reason: String },

    /// C011: Description slug violates the naming contract
    #[error("[C011] Invalid description '{raw}': {reason}")]
    InvalidDescription { raw: String, reason: String },

    /// C012: No version available after the current maximum
    #[error("[C012] Version sequence exhausted: no version available after {last}")]
    VersionOverflow { last: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
