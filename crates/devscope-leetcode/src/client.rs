//! HTTP client for the LeetCode GraphQL endpoint and its REST alternate.

use std::time::Duration;

use devscope_core::LeetCodeProfile;
use reqwest::{Client, Url};

use crate::error::LeetCodeError;
use crate::normalize::{from_graphql, from_stats_api};
use crate::types::{GraphqlEnvelope, RawStatsApi};

/// The user-profile selection: solved counts by difficulty, ranking, and
/// contest standing in one round trip.
const PROFILE_QUERY: &str = r"
query userProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile { ranking reputation }
    submitStats { acSubmissionNum { difficulty count } }
  }
  allQuestionsCount { difficulty count }
  userContestRanking(username: $username) { rating globalRanking }
}";

/// Client for LeetCode user statistics.
///
/// Primary transport is the platform's GraphQL endpoint; a community REST
/// stats proxy serves as the single alternate attempt when the primary
/// fails for any reason.
pub struct LeetCodeClient {
    client: Client,
    graphql_url: Url,
    stats_url: Url,
}

impl LeetCodeClient {
    /// Creates a new client against the given GraphQL and stats-proxy
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`LeetCodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LeetCodeError::InvalidUrl`] if either
    /// URL is invalid.
    pub fn new(
        graphql_url: &str,
        stats_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, LeetCodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("devscope/0.1 (profile-aggregation)")
            .build()?;

        let parse = |raw: &str| -> Result<Url, LeetCodeError> {
            Url::parse(raw).map_err(|e| LeetCodeError::InvalidUrl(format!("'{raw}': {e}")))
        };

        Ok(Self {
            client,
            graphql_url: parse(graphql_url)?,
            stats_url: parse(&format!("{}/", stats_url.trim_end_matches('/')))?,
        })
    }

    /// Fetches user statistics, preferring GraphQL and falling through to
    /// the REST proxy on any primary failure.
    ///
    /// # Errors
    ///
    /// Returns the alternate endpoint's error when both transports fail;
    /// the primary failure is logged, not returned.
    pub async fn fetch_stats(&self, username: &str) -> Result<LeetCodeProfile, LeetCodeError> {
        match self.fetch_graphql(username).await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                tracing::warn!(
                    username,
                    source = "leetcode_graphql",
                    error = %e,
                    "primary LeetCode endpoint failed, trying stats proxy"
                );
                self.fetch_stats_api(username).await
            }
        }
    }

    /// One GraphQL round trip for the full user-profile selection.
    ///
    /// # Errors
    ///
    /// - [`LeetCodeError::UserNotFound`] when `matchedUser` comes back null.
    /// - [`LeetCodeError::Http`] / [`LeetCodeError::UnexpectedStatus`] /
    ///   [`LeetCodeError::Deserialize`] for transport and shape failures.
    pub async fn fetch_graphql(&self, username: &str) -> Result<LeetCodeProfile, LeetCodeError> {
        let body = serde_json::json!({
            "query": PROFILE_QUERY,
            "variables": { "username": username },
        });
        let response = self
            .client
            .post(self.graphql_url.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeetCodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.graphql_url.to_string(),
            });
        }

        let text = response.text().await?;
        let envelope: GraphqlEnvelope =
            serde_json::from_str(&text).map_err(|e| LeetCodeError::Deserialize {
                context: format!("graphql userProfile({username})"),
                source: e,
            })?;

        let mut data = envelope.data;
        let Some(user) = data.matched_user.take() else {
            return Err(LeetCodeError::UserNotFound {
                username: username.to_string(),
            });
        };
        Ok(from_graphql(data, user))
    }

    /// One GET against the community stats proxy.
    ///
    /// # Errors
    ///
    /// - [`LeetCodeError::UserNotFound`] when the proxy reports
    ///   `"status": "error"`.
    /// - [`LeetCodeError::Http`] / [`LeetCodeError::UnexpectedStatus`] /
    ///   [`LeetCodeError::Deserialize`] for transport and shape failures.
    pub async fn fetch_stats_api(&self, username: &str) -> Result<LeetCodeProfile, LeetCodeError> {
        let url = self
            .stats_url
            .join(username)
            .map_err(|e| LeetCodeError::InvalidUrl(format!("username path '{username}': {e}")))?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeetCodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        let raw: RawStatsApi =
            serde_json::from_str(&text).map_err(|e| LeetCodeError::Deserialize {
                context: format!("stats proxy for {username}"),
                source: e,
            })?;
        if raw.status == "error" {
            return Err(LeetCodeError::UserNotFound {
                username: username.to_string(),
            });
        }
        Ok(from_stats_api(username, raw))
    }
}
