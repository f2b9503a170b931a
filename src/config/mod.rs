//! Configuration loading and validation
//!
//! Settings are read once at startup from a TOML file into a strongly-typed
//! struct. Missing or malformed values fail here, never lazily at first use.

use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "sweep.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration file found (searched: {searched})")]
    NotFound { searched: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level settings, mirroring the two sections of the config file
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub github: GithubSettings,
    pub cleanup: CleanupSettings,
}

/// Connection settings for the hosting API
#[derive(Debug, Clone, Deserialize)]
pub struct GithubSettings {
    pub token: String,

    /// Base URL of the REST API (no trailing slash)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    pub org: String,
    pub repo: String,

    /// Account the token belongs to; included in the user agent
    pub username: String,
}

/// Policy knobs for the cleanup pass
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupSettings {
    pub protected_branches: Vec<String>,
    pub inactive_days_threshold: i64,
    pub feat_branch_pattern: String,
    pub base_branch: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Settings {
    /// Load settings from `explicit` if given, otherwise from `./sweep.toml`
    /// or the per-user config directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = resolve_config_path(explicit)?;
        Self::load_from(&path)
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut settings: Settings =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        settings.github.token = expand_env_vars(&settings.github.token)?;
        settings.github.api_url = expand_env_vars(&settings.github.api_url)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("github.token", &self.github.token)?;
        require_non_empty("github.org", &self.github.org)?;
        require_non_empty("github.repo", &self.github.repo)?;
        require_non_empty("github.username", &self.github.username)?;
        require_non_empty("cleanup.feat_branch_pattern", &self.cleanup.feat_branch_pattern)?;
        require_non_empty("cleanup.base_branch", &self.cleanup.base_branch)?;

        if !self.github.api_url.starts_with("http://") && !self.github.api_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(format!(
                "github.api_url must be an http(s) URL, got '{}'",
                self.github.api_url
            )));
        }

        if self.cleanup.inactive_days_threshold < 0 {
            return Err(ConfigError::Invalid(format!(
                "cleanup.inactive_days_threshold must be non-negative, got {}",
                self.cleanup.inactive_days_threshold
            )));
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Resolve the config file path: explicit flag first, then the working
/// directory, then the per-user config directory.
fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(ConfigError::NotFound {
            searched: path.display().to_string(),
        });
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("sweep").join("config.toml"));
    }

    for candidate in &candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
    }

    Err(ConfigError::NotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Expand ${VAR} and $VAR patterns from the environment
///
/// A reference to an unset variable is an error: a half-expanded token must
/// not survive until the first authenticated request.
fn expand_env_vars(value: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("Invalid regex pattern");

    let mut missing: Vec<String> = Vec::new();
    let expanded = re
        .replace_all(value, |caps: &regex::Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match env::var(name) {
                Ok(v) => v,
                Err(_) => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        })
        .to_string();

    if let Some(name) = missing.first() {
        return Err(ConfigError::Invalid(format!(
            "environment variable {name} referenced by the configuration is not set"
        )));
    }

    Ok(expanded)
}
