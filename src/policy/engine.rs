//! The sequential cleanup pass
//!
//! Branches are processed one at a time in listed order. Classification and
//! deletion both depend on remote calls, so nothing here is parallelized and
//! deletes are never issued out of order. A failure on one branch is
//! recorded and the pass moves on; it never aborts the whole run.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::github::{Branch, RepoService, ServiceError};

use super::rules::{self, BranchFacts, DeleteReason};
use super::CleanupPolicy;

/// What happened to one branch during the pass
#[derive(Debug)]
pub enum Outcome {
    /// In the protected set; no classification was attempted
    Protected,
    /// Deleted (or, in dry-run, would have been) for the given reason
    Deleted(DeleteReason),
    /// No deletion rule applied
    Retained,
    /// A remote call failed while classifying or deleting this branch
    Failed(ServiceError),
}

#[derive(Debug)]
pub struct BranchOutcome {
    pub branch: String,
    pub outcome: Outcome,
}

/// Results of one cleanup pass, in branch-listing order
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub outcomes: Vec<BranchOutcome>,
}

impl CleanupReport {
    pub fn deleted(&self) -> impl Iterator<Item = &BranchOutcome> {
        self.outcomes
            .iter()
            .filter(|entry| matches!(entry.outcome, Outcome::Deleted(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &BranchOutcome> {
        self.outcomes
            .iter()
            .filter(|entry| matches!(entry.outcome, Outcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Run one cleanup pass over every branch the service lists.
///
/// The branch list is fetched once and treated as an immutable snapshot for
/// the duration of the pass. With `dry_run` set, decisions are made exactly
/// as in a real pass but no delete call is issued.
pub fn run_cleanup(
    service: &dyn RepoService,
    policy: &CleanupPolicy,
    now: DateTime<Utc>,
    dry_run: bool,
) -> Result<CleanupReport, ServiceError> {
    let branches = service.list_branches()?;

    let mut report = CleanupReport {
        outcomes: Vec::with_capacity(branches.len()),
    };

    for branch in &branches {
        let outcome = process_branch(service, policy, branch, now, dry_run);
        if let Outcome::Failed(err) = &outcome {
            warn!(branch = %branch.name, error = %err, "branch processing failed");
        }
        report.outcomes.push(BranchOutcome {
            branch: branch.name.clone(),
            outcome,
        });
    }

    Ok(report)
}

fn process_branch(
    service: &dyn RepoService,
    policy: &CleanupPolicy,
    branch: &Branch,
    now: DateTime<Utc>,
    dry_run: bool,
) -> Outcome {
    // Protection short-circuits before any further remote calls
    if policy.is_protected(&branch.name) {
        return Outcome::Protected;
    }

    let facts = match gather_facts(service, policy, branch) {
        Ok(facts) => facts,
        Err(err) => return Outcome::Failed(err),
    };

    match rules::first_match(&facts, policy, now) {
        Some(reason) => {
            if !dry_run {
                if let Err(err) = service.delete_branch_ref(&branch.name) {
                    return Outcome::Failed(err);
                }
            }
            Outcome::Deleted(reason)
        }
        None => Outcome::Retained,
    }
}

/// Fetch everything the rules need for one branch: the current head (the
/// listing snapshot may be stale by now), its commit timestamp, and how it
/// relates to the base branch.
fn gather_facts(
    service: &dyn RepoService,
    policy: &CleanupPolicy,
    branch: &Branch,
) -> Result<BranchFacts, ServiceError> {
    let detail = service.get_branch(&branch.name)?;
    let commit = service.get_commit(&detail.commit.sha)?;
    let comparison = service.compare(&policy.base_branch, &commit.sha)?;

    Ok(BranchFacts {
        name: branch.name.clone(),
        merge_status: comparison.status,
        committed_at: commit.committed_at(),
    })
}
