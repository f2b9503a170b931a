//! Read-only report views over the branch listing
//!
//! These reuse the classifier predicates and never mutate anything; running
//! them twice against an unchanged repository yields identical output. Any
//! `ServiceError` propagates to the caller.

use chrono::{DateTime, Utc};

use crate::github::{RepoService, ServiceError};

use super::classifier;

/// Names of every branch, in listing order.
pub fn list_all(service: &dyn RepoService) -> Result<Vec<String>, ServiceError> {
    let branches = service.list_branches()?;
    Ok(branches.into_iter().map(|b| b.name).collect())
}

/// Names of branches whose head commit is strictly older than the threshold.
pub fn list_inactive(
    service: &dyn RepoService,
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<String>, ServiceError> {
    let mut inactive = Vec::new();
    for branch in service.list_branches()? {
        let detail = service.get_branch(&branch.name)?;
        let commit = service.get_commit(&detail.commit.sha)?;
        if classifier::is_inactive(commit.committed_at(), threshold_days, now) {
            inactive.push(branch.name);
        }
    }
    Ok(inactive)
}

/// Names of branches fully contained in `base`.
pub fn list_merged(service: &dyn RepoService, base: &str) -> Result<Vec<String>, ServiceError> {
    let mut merged = Vec::new();
    for branch in service.list_branches()? {
        let comparison = service.compare(base, &branch.commit.sha)?;
        if classifier::is_merged(comparison.status) {
            merged.push(branch.name);
        }
    }
    Ok(merged)
}

/// Names of branches carrying commits `base` does not have.
pub fn list_unmerged(service: &dyn RepoService, base: &str) -> Result<Vec<String>, ServiceError> {
    let mut unmerged = Vec::new();
    for branch in service.list_branches()? {
        let comparison = service.compare(base, &branch.commit.sha)?;
        if classifier::has_unmerged_work(comparison.status) {
            unmerged.push(branch.name);
        }
    }
    Ok(unmerged)
}
