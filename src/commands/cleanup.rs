//! The deletion pass

use anyhow::{bail, Result};
use chrono::Utc;
use colored::Colorize;
use std::path::Path;

use crate::policy::engine::{self, Outcome};

use super::common::{self, Context};

pub fn execute(config_path: Option<&Path>, dry_run: bool) -> Result<()> {
    let ctx = common::load(config_path)?;
    run_pass(&ctx, dry_run)
}

/// Run the cleanup pass and report every per-branch outcome.
///
/// Failures on individual branches are printed as they are encountered and
/// turned into a non-zero exit at the end; they never stop the pass.
pub fn run_pass(ctx: &Context, dry_run: bool) -> Result<()> {
    let policy = ctx.policy();

    if dry_run {
        println!("{}", "Cleanup (dry run):".bold());
    } else {
        println!("{}", "Cleanup:".bold());
    }

    let report = engine::run_cleanup(&ctx.client, &policy, Utc::now(), dry_run)?;

    for entry in &report.outcomes {
        match &entry.outcome {
            Outcome::Protected => {
                println!("  Skipping protected branch: {}", entry.branch.yellow());
            }
            Outcome::Deleted(reason) => {
                if dry_run {
                    println!("  would delete {} ({reason})", entry.branch);
                } else {
                    println!(
                        "  {} Deleted {} ({reason})",
                        "✓".green().bold(),
                        entry.branch
                    );
                }
            }
            Outcome::Retained => {
                println!("  {}", format!("{} retained", entry.branch).dimmed());
            }
            Outcome::Failed(err) => {
                eprintln!("  {} {}: {err}", "✗".red().bold(), entry.branch);
            }
        }
    }

    let deleted = report.deleted().count();
    let failed = report.failures().count();
    if dry_run {
        println!("{deleted} branch(es) would be deleted.");
    } else {
        println!("{deleted} branch(es) deleted.");
    }

    if failed > 0 {
        bail!("{failed} branch(es) could not be processed");
    }
    Ok(())
}
