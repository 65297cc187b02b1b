//! HTTP client for the GitHub REST API.
//!
//! Wraps `reqwest` with GitHub-specific error handling, optional token
//! auth, and typed response deserialization. The user record and the
//! repository list are fetched concurrently and folded into one
//! [`GitHubProfile`] by the normalization step.

use std::time::Duration;

use chrono::{Datelike, Utc};
use devscope_core::GitHubProfile;
use reqwest::{Client, StatusCode, Url};

use crate::error::GitHubError;
use crate::normalize::build_profile;
use crate::types::{RawRepo, RawUser};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Client for the GitHub REST API.
///
/// Use [`GitHubClient::new`] for production or
/// [`GitHubClient::with_base_url`] to point at a mock server in tests.
/// The token is optional: without one, requests run unauthenticated at
/// GitHub's lower anonymous rate limit.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: Url,
}

impl GitHubClient {
    /// Creates a new client pointed at the production GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: Option<String>, timeout_secs: u64) -> Result<Self, GitHubError> {
        Self::with_base_url(token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GitHubError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        token: Option<String>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("devscope/0.1 (profile-aggregation)")
            .build()?;

        // Ensure the base URL ends with exactly one slash so Url::join
        // appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GitHubError::InvalidUrl(format!("base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            token,
            base_url,
        })
    }

    /// Fetches the complete normalized profile for a login: the user record
    /// and repository list in parallel, then the derived aggregates.
    ///
    /// # Errors
    ///
    /// - [`GitHubError::NotFound`] if the login does not exist.
    /// - [`GitHubError::Http`] on network failure.
    /// - [`GitHubError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`GitHubError::Deserialize`] if a response does not match the
    ///   expected shape.
    pub async fn fetch_stats(&self, login: &str) -> Result<GitHubProfile, GitHubError> {
        let (user, repos) = tokio::try_join!(self.fetch_user(login), self.fetch_repos(login))?;
        Ok(build_profile(user, repos, Utc::now().year()))
    }

    /// Fetches the user record via `GET /users/{login}`.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::fetch_stats`].
    pub async fn fetch_user(&self, login: &str) -> Result<RawUser, GitHubError> {
        let url = self.endpoint(&format!("users/{login}"))?;
        let body = self.request_json(&url, login).await?;
        serde_json::from_value(body).map_err(|e| GitHubError::Deserialize {
            context: format!("users/{login}"),
            source: e,
        })
    }

    /// Fetches the repository list via
    /// `GET /users/{login}/repos?sort=updated&per_page=100`.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::fetch_stats`].
    pub async fn fetch_repos(&self, login: &str) -> Result<Vec<RawRepo>, GitHubError> {
        let mut url = self.endpoint(&format!("users/{login}/repos"))?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", "100");
        let body = self.request_json(&url, login).await?;
        serde_json::from_value(body).map_err(|e| GitHubError::Deserialize {
            context: format!("users/{login}/repos"),
            source: e,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GitHubError> {
        self.base_url
            .join(path)
            .map_err(|e| GitHubError::InvalidUrl(format!("path '{path}': {e}")))
    }

    /// Sends a GET request with the GitHub media type (and token when
    /// configured), maps the status, and parses the body as JSON.
    async fn request_json(
        &self,
        url: &Url,
        login: &str,
    ) -> Result<serde_json::Value, GitHubError> {
        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound {
                login: login.to_string(),
            });
        }
        if !status.is_success() {
            return Err(GitHubError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GitHubError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_against_base() {
        let client =
            GitHubClient::with_base_url(None, 30, "https://api.github.com").expect("client");
        let url = client.endpoint("users/octocat").expect("valid path");
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client =
            GitHubClient::with_base_url(None, 30, "http://localhost:8080/").expect("client");
        let url = client.endpoint("users/octocat").expect("valid path");
        assert_eq!(url.as_str(), "http://localhost:8080/users/octocat");
    }
}
