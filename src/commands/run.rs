//! Full sequence: every report, then the cleanup pass
//!
//! Mirrors the tool's single entry point: list all branches, the inactive
//! ones, the merged ones, the ones with unmerged work, and finally delete
//! whatever the policy selects.

use anyhow::Result;
use std::path::Path;

use super::{branches, cleanup, common, inactive, merged, unmerged};

pub fn execute(config_path: Option<&Path>, dry_run: bool) -> Result<()> {
    let ctx = common::load(config_path)?;

    branches::render(&ctx)?;
    println!();
    inactive::render(&ctx)?;
    println!();
    merged::render(&ctx)?;
    println!();
    unmerged::render(&ctx)?;
    println!();
    cleanup::run_pass(&ctx, dry_run)
}
