//! Branch cleanup policy
//!
//! Splits into pure classification predicates ([`classifier`]), an explicit
//! ordered table of deletion rules ([`rules`]), the sequential cleanup pass
//! ([`engine`]), and read-only report views ([`report`]).

pub mod classifier;
pub mod engine;
pub mod report;
pub mod rules;

use std::collections::HashSet;

use crate::config::CleanupSettings;

/// Resolved policy knobs for one cleanup pass
#[derive(Debug, Clone)]
pub struct CleanupPolicy {
    /// Branch names exempt from deletion no matter what else matches
    pub protected: HashSet<String>,
    /// A branch is inactive when its head commit is strictly older than this
    /// many days
    pub inactive_days: i64,
    /// Substring identifying disposable feature branches
    pub pattern: String,
    /// Branch every comparison is made against
    pub base_branch: String,
}

impl From<&CleanupSettings> for CleanupPolicy {
    fn from(settings: &CleanupSettings) -> Self {
        Self {
            protected: settings.protected_branches.iter().cloned().collect(),
            inactive_days: settings.inactive_days_threshold,
            pattern: settings.feat_branch_pattern.clone(),
            base_branch: settings.base_branch.clone(),
        }
    }
}

impl CleanupPolicy {
    pub fn is_protected(&self, branch_name: &str) -> bool {
        self.protected.contains(branch_name)
    }
}
