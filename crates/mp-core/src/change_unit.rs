//! Change-unit model and the file-naming contract.
//!
//! A change-unit is one versioned, named batch of schema/data statements.
//! File names follow `NNN_snake_case_description.sql`: a fixed-width numeric
//! prefix, a single underscore separator, a lowercase slug, and the `.sql`
//! extension. Once a unit is committed its content never changes; corrections
//! are new units with higher versions.

use crate::error::{CoreError, CoreResult};
use crate::version::{Version, VERSION_WIDTH};
use std::path::PathBuf;

/// File extension for change-unit statement batches.
pub const CHANGE_UNIT_EXTENSION: &str = "sql";

/// One discovered change-unit.
#[derive(Debug, Clone)]
pub struct ChangeUnit {
    /// Fixed-width numeric version, unique across the history.
    pub version: Version,

    /// snake_case slug from the file name.
    pub description: String,

    /// Raw SQL batch. Opaque to the ledger beyond success/failure; statements
    /// execute in text order.
    pub statements: String,

    /// Where the unit was discovered. Not semantically meaningful.
    pub source_path: PathBuf,
}

impl ChangeUnit {
    /// Canonical file name for this unit.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.{}",
            self.version, self.description, CHANGE_UNIT_EXTENSION
        )
    }

    /// Whether the statement batch contains anything executable.
    ///
    /// Whitespace-only and comment-only batches count as empty. Comment
    /// markers inside single-quoted string literals are payload, not
    /// comments.
    pub fn has_statements(&self) -> bool {
        has_executable_sql(&self.statements)
    }
}

/// Parse a change-unit file name into its version and description slug.
///
/// Rejections carry the reason so discovery errors are actionable. Notably,
/// a double-underscore separator (`002__foo.sql`) fails here because the
/// slug may not begin with an underscore.
pub fn parse_file_name(name: &str) -> CoreResult<(Version, String)> {
    let malformed = |reason: &str| CoreError::MalformedIdentifier {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let stem = name
        .strip_suffix(&format!(".{CHANGE_UNIT_EXTENSION}"))
        .ok_or_else(|| malformed("expected '.sql' extension"))?;

    if stem.len() < VERSION_WIDTH + 2 {
        return Err(malformed(
            "expected 'NNN_description.sql' with a non-empty description",
        ));
    }

    if !stem.is_char_boundary(VERSION_WIDTH) {
        return Err(malformed(
            "expected a three-digit zero-padded version prefix",
        ));
    }
    let (prefix, rest) = stem.split_at(VERSION_WIDTH);
    let version = Version::parse(prefix)
        .map_err(|_| malformed("expected a three-digit zero-padded version prefix"))?;

    let slug = rest
        .strip_prefix('_')
        .ok_or_else(|| malformed("expected a single underscore after the version prefix"))?;

    validate_description(slug).map_err(|e| match e {
        CoreError::InvalidDescription { reason, .. } => malformed(&reason),
        other => other,
    })?;

    Ok((version, slug.to_string()))
}

/// Check a description slug against the naming contract: lowercase ASCII
/// letters, digits, and single underscores; starts with a letter; no
/// leading, trailing, or doubled underscores.
pub fn validate_description(slug: &str) -> CoreResult<()> {
    let invalid = |reason: &str| CoreError::InvalidDescription {
        raw: slug.to_string(),
        reason: reason.to_string(),
    };

    if slug.is_empty() {
        return Err(invalid("description must not be empty"));
    }
    if !slug.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(invalid(
            "description must start with a lowercase ASCII letter",
        ));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid(
            "description may only contain lowercase letters, digits, and underscores",
        ));
    }
    if slug.ends_with('_') {
        return Err(invalid("description must not end with an underscore"));
    }
    if slug.contains("__") {
        return Err(invalid(
            "description must not contain consecutive underscores",
        ));
    }
    Ok(())
}

/// Whether `sql` contains anything beyond whitespace and comments.
fn has_executable_sql(sql: &str) -> bool {
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '-' if chars.peek() == Some(&'-') => {
                // Line comment: skip to end of line.
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                // Block comment: skip to the closing marker. An unterminated
                // block swallows the rest, matching SQLite's tokenizer.
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => return true,
        }
    }
    false
}

#[cfg(test)]
#[path = "change_unit_test.rs"]
mod tests;
