//! Profile aggregation orchestration.

use devscope_core::{AppConfig, LeetCodeProfile, LinkedInProfile};
use devscope_github::GitHubClient;
use devscope_leetcode::LeetCodeClient;
use devscope_linkedin::LinkedInClient;
use devscope_summary::SummaryClient;

use crate::error::{AggregatorBuildError, ProfileError};
use crate::types::{AggregatedProfile, OptionalSource, ProfileQuery};

/// Owns the four clients and runs the aggregation policy over them.
///
/// All three platform fetches are issued concurrently; none of them gates
/// another. The required source's failure aborts the build before the
/// summarizer is ever invoked. Optional-source failures are logged and
/// converted to [`OptionalSource::Degraded`] with the client's documented
/// zero-valued profile, so the summarizer never sees an absent field.
pub struct ProfileAggregator {
    github: GitHubClient,
    linkedin: LinkedInClient,
    leetcode: LeetCodeClient,
    summary: SummaryClient,
}

impl ProfileAggregator {
    /// Assemble an aggregator from pre-built clients (used by tests to
    /// point everything at mock servers).
    #[must_use]
    pub fn new(
        github: GitHubClient,
        linkedin: LinkedInClient,
        leetcode: LeetCodeClient,
        summary: SummaryClient,
    ) -> Self {
        Self {
            github,
            linkedin,
            leetcode,
            summary,
        }
    }

    /// Build all four clients from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorBuildError`] when a client cannot be
    /// constructed (invalid endpoint URL, HTTP client setup failure).
    pub fn from_config(config: &AppConfig) -> Result<Self, AggregatorBuildError> {
        let timeout = config.http_timeout_secs;
        Ok(Self {
            github: GitHubClient::with_base_url(
                config.github_token.clone(),
                timeout,
                &config.github_api_url,
            )?,
            linkedin: LinkedInClient::new(
                &config.linkedin_proxy_url,
                config.linkedin_proxy_token.clone(),
                timeout,
            )?,
            leetcode: LeetCodeClient::new(
                &config.leetcode_graphql_url,
                &config.leetcode_stats_url,
                timeout,
            )?,
            summary: SummaryClient::new(
                &config.summary_api_url,
                config.summary_api_key.clone(),
                &config.summary_model,
                timeout,
            )?,
        })
    }

    /// Run one aggregation: fetch, degrade where allowed, summarize once.
    ///
    /// `query.github` must be a non-empty bare handle; the optional handles
    /// are skipped when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Github`] when the required source fails —
    /// the summarizer is not invoked in that case.
    pub async fn build_profile(
        &self,
        query: &ProfileQuery,
    ) -> Result<AggregatedProfile, ProfileError> {
        let linkedin_handle = query.linkedin.as_deref().filter(|h| !h.is_empty());
        let leetcode_handle = query.leetcode.as_deref().filter(|h| !h.is_empty());

        let (github, linkedin, leetcode) = tokio::join!(
            self.github.fetch_stats(&query.github),
            self.fetch_linkedin(linkedin_handle),
            self.fetch_leetcode(leetcode_handle),
        );
        let github = github?;

        tracing::info!(
            login = %github.login,
            linkedin_degraded = linkedin.is_degraded(),
            leetcode_degraded = leetcode.is_degraded(),
            "profile sources gathered, summarizing"
        );

        let summary = self
            .summary
            .summarize(&github, linkedin.as_option(), leetcode.as_option())
            .await;

        Ok(AggregatedProfile {
            github,
            linkedin,
            leetcode,
            summary,
        })
    }

    async fn fetch_linkedin(&self, handle: Option<&str>) -> OptionalSource<LinkedInProfile> {
        let Some(handle) = handle else {
            return OptionalSource::Skipped;
        };
        match self.linkedin.fetch_profile(handle).await {
            Ok(profile) => OptionalSource::Available(profile),
            Err(e) => {
                tracing::warn!(
                    handle,
                    source = "linkedin",
                    error = %e,
                    "optional source failed, substituting defaults"
                );
                OptionalSource::Degraded(LinkedInProfile::fallback(handle))
            }
        }
    }

    async fn fetch_leetcode(&self, handle: Option<&str>) -> OptionalSource<LeetCodeProfile> {
        let Some(handle) = handle else {
            return OptionalSource::Skipped;
        };
        match self.leetcode.fetch_stats(handle).await {
            Ok(profile) => OptionalSource::Available(profile),
            Err(e) => {
                tracing::warn!(
                    handle,
                    source = "leetcode",
                    error = %e,
                    "optional source failed, substituting defaults"
                );
                OptionalSource::Degraded(LeetCodeProfile::fallback(handle))
            }
        }
    }
}
