//! Shared setup for all commands

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::config::Settings;
use crate::github::GithubClient;
use crate::policy::CleanupPolicy;

/// Loaded configuration plus the service client built from it
pub struct Context {
    pub settings: Settings,
    pub client: GithubClient,
}

impl Context {
    pub fn policy(&self) -> CleanupPolicy {
        CleanupPolicy::from(&self.settings.cleanup)
    }
}

/// Load settings and construct the API client once, at command start.
pub fn load(config_path: Option<&Path>) -> Result<Context> {
    let settings = Settings::load(config_path).context("Failed to load configuration")?;
    let client = GithubClient::new(&settings.github).context("Failed to create API client")?;
    Ok(Context { settings, client })
}

/// Print a name-per-line report section.
pub fn print_branch_list(names: &[String]) {
    use colored::Colorize;

    if names.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for name in names {
        println!("  {name}");
    }
}
