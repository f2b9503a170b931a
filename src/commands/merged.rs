//! List branches already contained in the base branch

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
    let names = report::list_merged(&ctx.client, base)?;
    println!("{}", format!("Branches merged into {base}:").bold());
    common::print_branch_list(&names);
    Ok(())
}
