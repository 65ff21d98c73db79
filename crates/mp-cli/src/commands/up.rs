//! Up command implementation

use anyhow::Result;
use mp_ledger::{ErrorPolicy, Runner};
use std::time::Instant;

use crate::cli::{GlobalArgs, UpArgs};
use crate::commands::common::fail;
use crate::context::RuntimeContext;

/// Execute the up command
pub fn execute(args: &UpArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let dir = ctx.migrations_dir();

    let policy = if args.keep_going {
        ErrorPolicy::KeepGoing
    } else {
        ErrorPolicy::Halt
    };
    let runner = Runner::new(ctx.config.origin_version(), policy);

    let mut store = ctx.open_store()?;

    if args.dry_run {
        let plan = runner.plan(&store, &dir).map_err(fail)?;
        for version in &plan.orphaned {
            eprintln!("Warning: ledger entry {version} has no matching change-unit file");
        }
        if plan.is_settled() {
            println!("Nothing to apply.");
        } else {
            for unit in &plan.pending {
                println!("  would apply {} ({})", unit.version, unit.description);
            }
            println!("\n{} change-unit(s) pending", plan.pending.len());
        }
        return Ok(());
    }

    let start = Instant::now();
    let report = runner.run(&mut store, &dir).map_err(fail)?;

    for version in &report.orphaned {
        eprintln!("Warning: ledger entry {version} has no matching change-unit file");
    }

    if report.results.is_empty() {
        println!("Nothing to apply.");
        return Ok(());
    }

    for result in &report.results {
        match &result.outcome {
            Ok(outcome) => println!(
                "  ✓ {}_{} ({}) [{}ms]",
                result.version,
                result.description,
                outcome.label(),
                result.duration_ms
            ),
            Err(e) => println!("  ✗ {}_{} - {}", result.version, result.description, e),
        }
    }

    if report.skipped > 0 {
        println!(
            "  {} change-unit(s) skipped due to early termination",
            report.skipped
        );
    }

    println!();
    println!(
        "Applied {}, re-applied {}, failed {}",
        report.applied_count(),
        report.reapplied_count(),
        report.failed_count()
    );
    println!("Total time: {}ms", start.elapsed().as_millis());

    if !report.is_success() {
        anyhow::bail!("{} change-unit(s) failed", report.failed_count());
    }
    Ok(())
}

#[cfg(test)]
#[path = "up_test.rs"]
mod tests;
