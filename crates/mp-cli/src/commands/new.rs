//! New command implementation - scaffolds the next change-unit file

use anyhow::{Context, Result};
use mp_core::{change_unit, discover};
use std::fs;

use crate::cli::{GlobalArgs, NewArgs};
use crate::context::RuntimeContext;

/// Execute the new command
pub fn execute(args: &NewArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    change_unit::validate_description(&args.description)?;

    let dir = ctx.migrations_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let units = discover(&dir)?;
    let version = match units.last() {
        Some(last) => last.version.next()?,
        None => ctx.config.origin_version(),
    };

    let file_name = format!("{version}_{}.sql", args.description);
    let path = dir.join(&file_name);
    if path.exists() {
        anyhow::bail!("File already exists: {}", path.display());
    }

    let content = format!(
        "-- {file_name}\n\
         -- Every statement must be safe to re-run against a store where this\n\
         -- unit is already applied (IF NOT EXISTS / INSERT OR IGNORE).\n\n"
    );
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "new_test.rs"]
mod tests;
