//! Status command implementation

use anyhow::Result;
use mp_core::{discover, ChangeUnit, Version};
use mp_ledger::Plan;
use mp_store::{LedgerEntry, LedgerStore};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::context::RuntimeContext;

/// JSON shape of `mp status --output json`
#[derive(Serialize)]
struct StatusView {
    target: String,
    applied: Vec<LedgerEntry>,
    pending: Vec<PendingRow>,
    orphaned: Vec<Version>,
}

#[derive(Serialize)]
struct PendingRow {
    version: Version,
    description: String,
}

/// Execute the status command
pub fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let store = ctx.open_store()?;

    let units = discover(&ctx.migrations_dir())?;
    let entries = store.entries()?;
    let applied = store.applied_versions()?;
    let plan = Plan::compute(units, &applied);

    match args.output {
        OutputFormat::Table => print_table(&ctx, &entries, &plan),
        OutputFormat::Json => print_json(&ctx, entries, &plan)?,
    }

    Ok(())
}

fn print_table(ctx: &RuntimeContext, entries: &[LedgerEntry], plan: &Plan) {
    println!("Target store: {}\n", ctx.db_path);

    if entries.is_empty() {
        println!("No change-units applied yet.");
    } else {
        println!("Applied:");
        for entry in entries {
            println!(
                "  {}  {:<36} {}",
                entry.version,
                entry.description,
                entry.applied_at.to_rfc3339()
            );
        }
    }

    if plan.is_settled() {
        println!("\nStore is up to date.");
    } else {
        println!("\nPending:");
        for unit in &plan.pending {
            println!("  {}  {}", unit.version, unit.description);
        }
    }

    for version in &plan.orphaned {
        eprintln!("Warning: ledger entry {version} has no matching change-unit file");
    }

    println!(
        "\n{} applied, {} pending",
        entries.len(),
        plan.pending.len()
    );
}

fn print_json(ctx: &RuntimeContext, entries: Vec<LedgerEntry>, plan: &Plan) -> Result<()> {
    let view = StatusView {
        target: ctx.db_path.clone(),
        applied: entries,
        pending: plan
            .pending
            .iter()
            .map(|u: &ChangeUnit| PendingRow {
                version: u.version,
                description: u.description.clone(),
            })
            .collect(),
        orphaned: plan.orphaned.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
