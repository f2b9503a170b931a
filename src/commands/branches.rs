//! List every branch in the repository

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
    let names = report::list_all(&ctx.client)?;
    println!("{}", "All branches:".bold());
    common::print_branch_list(&names);
    Ok(())
}
