//! Blocking REST client for the GitHub v3 API
//!
//! One client instance is built per process with fixed timeouts so a stalled
//! remote cannot hang a cleanup pass indefinitely.

use reqwest::blocking::{Client, Response};
use reqwest::header;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::GithubSettings;

use super::{Branch, BranchDetail, CommitInfo, Comparison, RepoService, ServiceError};

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error body shape the API uses for non-2xx responses
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct GithubClient {
    http: Client,
    api_url: String,
    org: String,
    repo: String,
    token: String,
}

impl GithubClient {
    pub fn new(settings: &GithubSettings) -> Result<Self, ServiceError> {
        let user_agent = format!(
            "sweep/{} ({})",
            env!("CARGO_PKG_VERSION"),
            settings.username
        );

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            org: settings.org.clone(),
            repo: settings.repo.clone(),
            token: settings.token.clone(),
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.org, self.repo, path
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T, ServiceError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()?;

        let response = check_status(response, resource)?;
        response
            .json::<T>()
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

/// Map a non-success response to the error taxonomy, preserving the API's
/// own message when the body parses.
fn check_status(response: Response, resource: &str) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(ServiceError::NotFound {
            resource: resource.to_string(),
        });
    }

    let message = response
        .json::<ApiErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}

impl RepoService for GithubClient {
    fn list_branches(&self) -> Result<Vec<Branch>, ServiceError> {
        let url = self.repo_url("branches");
        self.get_json(&url, "branch listing")
    }

    fn get_branch(&self, name: &str) -> Result<BranchDetail, ServiceError> {
        let url = self.repo_url(&format!("branches/{name}"));
        self.get_json(&url, &format!("branch '{name}'"))
    }

    fn get_commit(&self, sha: &str) -> Result<CommitInfo, ServiceError> {
        let url = self.repo_url(&format!("commits/{sha}"));
        self.get_json(&url, &format!("commit {sha}"))
    }

    fn compare(&self, base: &str, head: &str) -> Result<Comparison, ServiceError> {
        let url = self.repo_url(&format!("compare/{base}...{head}"));
        self.get_json(&url, &format!("comparison {base}...{head}"))
    }

    fn delete_branch_ref(&self, name: &str) -> Result<(), ServiceError> {
        let url = self.repo_url(&format!("git/refs/heads/{name}"));
        debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()?;

        check_status(response, &format!("branch ref '{name}'"))?;
        Ok(())
    }
}
