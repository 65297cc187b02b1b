//! GitHub API wire types.
//!
//! These model the JSON the REST API actually returns, nullable fields and
//! all. Normalization into the explicit-empty [`devscope_core::GitHubProfile`]
//! happens in `normalize`; nothing downstream of that sees an `Option`.

use serde::Deserialize;

/// `GET /users/{login}` response.
#[derive(Debug, Deserialize)]
pub struct RawUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One element of the `GET /users/{login}/repos` response.
#[derive(Debug, Deserialize)]
pub struct RawRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}
