//! Hosting API collaborator
//!
//! The policy engine only ever talks to the [`RepoService`] trait; the
//! production implementation is a blocking REST client for the GitHub v3 API.

mod client;
mod types;

pub use client::GithubClient;
pub use types::{
    Branch, BranchDetail, CommitDetail, CommitInfo, CommitRef, CommitSignature, Comparison,
    MergeStatus, TreeRef,
};

use thiserror::Error;

/// Failures surfaced by the hosting API
///
/// Every operation is a single attempt; retry/backoff is deliberately not
/// the caller's concern here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Read and delete operations the cleanup policy requires from the
/// repository host. All calls are synchronous and block until success or a
/// [`ServiceError`].
pub trait RepoService {
    /// Enumerate the repository's branches.
    fn list_branches(&self) -> Result<Vec<Branch>, ServiceError>;

    /// Fetch a single branch with its full head commit.
    fn get_branch(&self, name: &str) -> Result<BranchDetail, ServiceError>;

    /// Fetch a commit by SHA.
    fn get_commit(&self, sha: &str) -> Result<CommitInfo, ServiceError>;

    /// Compare `head` against `base` and report how they relate.
    fn compare(&self, base: &str, head: &str) -> Result<Comparison, ServiceError>;

    /// Delete a branch ref. Irreversible.
    fn delete_branch_ref(&self, name: &str) -> Result<(), ServiceError>;
}
