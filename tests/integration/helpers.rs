//! In-memory repository service double and fixtures

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use sweep::github::{
    Branch, BranchDetail, CommitDetail, CommitInfo, CommitRef, CommitSignature, Comparison,
    MergeStatus, RepoService, ServiceError, TreeRef,
};
use sweep::policy::CleanupPolicy;

/// Fixed "now" so inactivity math is deterministic
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Policy matching the documented scenario: main/release protected,
/// 30-day threshold, "feat/" pattern, base "main".
pub fn test_policy() -> CleanupPolicy {
    CleanupPolicy {
        protected: ["main", "release"]
            .into_iter()
            .map(String::from)
            .collect(),
        inactive_days: 30,
        pattern: "feat/".to_string(),
        base_branch: "main".to_string(),
    }
}

/// In-memory stand-in for the hosting API
///
/// Branches are served in insertion order. Deletions are recorded rather
/// than applied, so a test can assert exactly which delete calls happened.
#[derive(Default)]
pub struct MockRepo {
    branches: Vec<Branch>,
    details: HashMap<String, BranchDetail>,
    commits: HashMap<String, CommitInfo>,
    comparisons: HashMap<String, MergeStatus>,
    failing: HashSet<String>,
    pub deleted: RefCell<Vec<String>>,
}

impl MockRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a branch with its head SHA, commit time, and compare status
    /// against the base.
    pub fn add_branch(
        &mut self,
        name: &str,
        sha: &str,
        committed_at: DateTime<Utc>,
        status: MergeStatus,
    ) -> &mut Self {
        self.branches.push(Branch {
            name: name.to_string(),
            commit: CommitRef {
                sha: sha.to_string(),
            },
        });

        let commit = CommitInfo {
            sha: sha.to_string(),
            detail: CommitDetail {
                committer: CommitSignature { date: committed_at },
                tree: TreeRef {
                    sha: format!("tree-{sha}"),
                },
            },
        };

        self.details.insert(
            name.to_string(),
            BranchDetail {
                name: name.to_string(),
                commit: commit.clone(),
            },
        );
        self.commits.insert(sha.to_string(), commit);
        self.comparisons.insert(sha.to_string(), status);
        self
    }

    /// Make every detail fetch for `name` fail with a 500.
    pub fn fail_branch(&mut self, name: &str) -> &mut Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn deleted_branches(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }
}

impl RepoService for MockRepo {
    fn list_branches(&self) -> Result<Vec<Branch>, ServiceError> {
        Ok(self.branches.clone())
    }

    fn get_branch(&self, name: &str) -> Result<BranchDetail, ServiceError> {
        if self.failing.contains(name) {
            return Err(ServiceError::Status {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound {
                resource: format!("branch '{name}'"),
            })
    }

    fn get_commit(&self, sha: &str) -> Result<CommitInfo, ServiceError> {
        self.commits
            .get(sha)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound {
                resource: format!("commit {sha}"),
            })
    }

    fn compare(&self, _base: &str, head: &str) -> Result<Comparison, ServiceError> {
        let status = self
            .comparisons
            .get(head)
            .copied()
            .ok_or_else(|| ServiceError::NotFound {
                resource: format!("comparison for {head}"),
            })?;
        Ok(Comparison {
            status,
            ahead_by: 0,
            behind_by: 0,
        })
    }

    fn delete_branch_ref(&self, name: &str) -> Result<(), ServiceError> {
        self.deleted.borrow_mut().push(name.to_string());
        Ok(())
    }
}
