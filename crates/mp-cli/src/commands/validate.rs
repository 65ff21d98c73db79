//! Validate command implementation
//!
//! Pure check: discovery plus structural validation, no store access.

use anyhow::{Context, Result};
use mp_core::{discover, validate};

use crate::cli::{GlobalArgs, ValidateArgs};
use crate::commands::common::print_findings;
use crate::context::RuntimeContext;

/// Execute the validate command
pub fn execute(_args: &ValidateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let dir = ctx.migrations_dir();

    let units = discover(&dir)
        .with_context(|| format!("Discovery failed in {}", dir.display()))?;
    let report = validate(&units, ctx.config.origin_version());

    if report.is_clean() {
        println!("✓ {} change-unit(s), no findings", units.len());
        return Ok(());
    }

    print_findings(&report);
    anyhow::bail!("Validation failed with {} finding(s)", report.findings().len());
}
