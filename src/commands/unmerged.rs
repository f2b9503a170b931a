//! List branches carrying work the base branch does not have

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::policy::report;

use super::common::{self, Context};

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let ctx = common::load(config_path)?;
    render(&ctx)
}

pub fn render(ctx: &Context) -> Result<()> {
    let base = &ctx.settings.cleanup.base_branch;
    let names = report::list_unmerged(&ctx.client, base)?;
    println!("{}", format!("Branches with work not in {base}:").bold());
    common::print_branch_list(&names);
    Ok(())
}
