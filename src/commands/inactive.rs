//! List branches inactive beyond the configured threshold

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use std::path::Path;

use crate::policy::report;

use super::common::{self, Context};

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let ctx = common::load(config_path)?;
    render(&ctx)
}

pub fn render(ctx: &Context) -> Result<()> {
    let threshold = ctx.settings.cleanup.inactive_days_threshold;
    let names = report::list_inactive(&ctx.client, threshold, Utc::now())?;
    println!(
        "{}",
        format!("Branches inactive for more than {threshold} days:").bold()
    );
    common::print_branch_list(&names);
    Ok(())
}
