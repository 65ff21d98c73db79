//! Change-unit discovery.

use crate::change_unit::{parse_file_name, ChangeUnit};
use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::Path;

/// Discover all change-units in `dir`, sorted ascending by version.
///
/// Every visible regular file must conform to the naming contract; a
/// non-conforming name is a `MalformedIdentifier` error, never a silent
/// skip. Dotfiles and subdirectories are ignored. An empty directory is a
/// valid, empty ledger.
pub fn discover(dir: &Path) -> CoreResult<Vec<ChangeUnit>> {
    if !dir.is_dir() {
        return Err(CoreError::MigrationsDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut units = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(CoreError::MalformedIdentifier {
                name: path.display().to_string(),
                reason: "file name is not valid UTF-8".to_string(),
            });
        };

        // Editor droppings and the like.
        if name.starts_with('.') {
            continue;
        }

        let (version, description) = parse_file_name(name)?;

        let statements = fs::read_to_string(&path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;

        log::debug!("discovered change-unit {version} ({name})");

        units.push(ChangeUnit {
            version,
            description,
            statements,
            source_path: path,
        });
    }

    units.sort_by_key(|u| u.version);
    Ok(units)
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
