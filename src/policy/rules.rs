//! Ordered deletion rules
//!
//! Rule priority is data, not code order in some branch chain: the table
//! below is evaluated front to back and the first match wins. A branch
//! matching several rules is deleted once, tagged with the first reason.

use chrono::{DateTime, Utc};

use super::classifier;
use super::CleanupPolicy;
use crate::github::MergeStatus;

/// Everything the deletion rules need to know about one branch
#[derive(Debug, Clone)]
pub struct BranchFacts {
    pub name: String,
    pub merge_status: MergeStatus,
    pub committed_at: DateTime<Utc>,
}

/// Why a branch was deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    Merged,
    Inactive,
    PatternMatch,
}

impl std::fmt::Display for DeleteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteReason::Merged => write!(f, "merged"),
            DeleteReason::Inactive => write!(f, "inactive"),
            DeleteReason::PatternMatch => write!(f, "pattern match"),
        }
    }
}

/// A named deletion rule: reason plus the predicate that triggers it
pub struct Rule {
    pub reason: DeleteReason,
    pub applies: fn(&BranchFacts, &CleanupPolicy, DateTime<Utc>) -> bool,
}

fn merged_applies(facts: &BranchFacts, _policy: &CleanupPolicy, _now: DateTime<Utc>) -> bool {
    classifier::is_merged(facts.merge_status)
}

fn inactive_applies(facts: &BranchFacts, policy: &CleanupPolicy, now: DateTime<Utc>) -> bool {
    classifier::is_inactive(facts.committed_at, policy.inactive_days, now)
}

fn pattern_applies(facts: &BranchFacts, policy: &CleanupPolicy, _now: DateTime<Utc>) -> bool {
    classifier::matches_pattern(&facts.name, &policy.pattern)
}

/// Deletion rules in priority order: merged before inactive before pattern.
pub const DELETION_RULES: [Rule; 3] = [
    Rule {
        reason: DeleteReason::Merged,
        applies: merged_applies,
    },
    Rule {
        reason: DeleteReason::Inactive,
        applies: inactive_applies,
    },
    Rule {
        reason: DeleteReason::PatternMatch,
        applies: pattern_applies,
    },
];

/// First rule that applies, if any.
pub fn first_match(
    facts: &BranchFacts,
    policy: &CleanupPolicy,
    now: DateTime<Utc>,
) -> Option<DeleteReason> {
    DELETION_RULES
        .iter()
        .find(|rule| (rule.applies)(facts, policy, now))
        .map(|rule| rule.reason)
}
