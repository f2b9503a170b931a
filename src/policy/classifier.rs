//! Pure classification predicates over fetched branch data
//!
//! No side effects here; everything the predicates need (including the
//! current time) is passed in, which keeps them directly testable.

use chrono::{DateTime, Utc};

use crate::github::MergeStatus;

/// A branch is merged when the compare endpoint reports its head `behind`
/// the base: every change it carries is already contained in the base.
pub fn is_merged(status: MergeStatus) -> bool {
    matches!(status, MergeStatus::Behind)
}

/// Strictly more than `threshold_days` whole days since the head commit.
/// A branch exactly `threshold_days` old is still active.
pub fn is_inactive(committed_at: DateTime<Utc>, threshold_days: i64, now: DateTime<Utc>) -> bool {
    (now - committed_at).num_days() > threshold_days
}

/// Case-sensitive substring match against the branch name.
pub fn matches_pattern(branch_name: &str, pattern: &str) -> bool {
    branch_name.contains(pattern)
}

/// A branch carries unmerged work when its head holds commits the base does
/// not: compare status `ahead` or `diverged`.
pub fn has_unmerged_work(status: MergeStatus) -> bool {
    matches!(status, MergeStatus::Ahead | MergeStatus::Diverged)
}
