use thiserror::Error;

/// The one error a profile build can surface: the required code-hosting
/// source failed. Optional-source and summarization failures are absorbed
/// into degraded results before they ever reach this type.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("code-hosting source failed: {0}")]
    Github(#[from] devscope_github::GitHubError),
}

impl ProfileError {
    /// True when the failure was an unknown handle rather than an
    /// upstream outage — callers map this to "check the handle and retry".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ProfileError::Github(devscope_github::GitHubError::NotFound { .. })
        )
    }
}

/// Client-construction failures when building an aggregator from config
/// (invalid endpoint URL, HTTP client setup).
#[derive(Debug, Error)]
pub enum AggregatorBuildError {
    #[error("github client: {0}")]
    Github(#[from] devscope_github::GitHubError),

    #[error("linkedin client: {0}")]
    LinkedIn(#[from] devscope_linkedin::LinkedInError),

    #[error("leetcode client: {0}")]
    LeetCode(#[from] devscope_leetcode::LeetCodeError),

    #[error("summary client: {0}")]
    Summary(#[from] devscope_summary::SummaryError),
}
