//! Wire types for the hosting API payloads this tool consumes

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the branch listing: name plus head commit pointer
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitRef,
}

/// Bare commit pointer as it appears in branch listings
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// A single branch fetched by name, with the full head commit
#[derive(Debug, Clone, Deserialize)]
pub struct BranchDetail {
    pub name: String,
    pub commit: CommitInfo,
}

/// A commit object: SHA plus the metadata the classifier needs
#[derive(Debug, Clone, Deserialize)]
pub struct CommitInfo {
    pub sha: String,
    #[serde(rename = "commit")]
    pub detail: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub committer: CommitSignature,
    pub tree: TreeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeRef {
    pub sha: String,
}

impl CommitInfo {
    pub fn committed_at(&self) -> DateTime<Utc> {
        self.detail.committer.date
    }

    pub fn tree_sha(&self) -> &str {
        &self.detail.tree.sha
    }
}

/// How a head ref relates to a base ref
///
/// `Behind` means every change on the head is already contained in the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStatus {
    Ahead,
    Behind,
    Identical,
    Diverged,
}

impl std::fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeStatus::Ahead => write!(f, "ahead"),
            MergeStatus::Behind => write!(f, "behind"),
            MergeStatus::Identical => write!(f, "identical"),
            MergeStatus::Diverged => write!(f, "diverged"),
        }
    }
}

/// Result of the compare endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    pub status: MergeStatus,
    #[serde(default)]
    pub ahead_by: u64,
    #[serde(default)]
    pub behind_by: u64,
}
