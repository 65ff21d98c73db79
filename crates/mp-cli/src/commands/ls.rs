//! List command implementation

use anyhow::Result;
use mp_core::{discover, ChangeUnit, Version};
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs, OutputFormat};
use crate::context::RuntimeContext;

/// One row of `mp ls` output
#[derive(Serialize)]
struct UnitRow {
    version: Version,
    description: String,
    file: String,
}

/// Execute the ls command
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let units = discover(&ctx.migrations_dir())?;

    match args.output {
        OutputFormat::Table => print_table(&units),
        OutputFormat::Json => print_json(&units)?,
    }

    Ok(())
}

fn print_table(units: &[ChangeUnit]) {
    if units.is_empty() {
        println!("No change-units found.");
        return;
    }

    println!("{:<8} {:<36} FILE", "VERSION", "DESCRIPTION");
    for unit in units {
        println!(
            "{:<8} {:<36} {}",
            unit.version.to_string(),
            unit.description,
            unit.source_path.display()
        );
    }
    println!("\n{} change-unit(s)", units.len());
}

fn print_json(units: &[ChangeUnit]) -> Result<()> {
    let rows: Vec<UnitRow> = units
        .iter()
        .map(|u| UnitRow {
            version: u.version,
            description: u.description.clone(),
            file: u.source_path.display().to_string(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
