//! HTTP client for the hosted chat-completion endpoint.

use std::time::Duration;

use devscope_core::{GitHubProfile, LeetCodeProfile, LinkedInProfile, SummaryResult};
use reqwest::{Client, Url};

use crate::error::SummaryError;
use crate::fallback::compute_fallback;
use crate::parse::parse_summary;
use crate::prompt::build_prompt;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1200;

/// Client for the summarization endpoint (OpenAI-compatible
/// chat-completion shape, bearer-token auth).
///
/// `summarize` never fails: one attempt is made against the endpoint, and
/// any failure resolves to the deterministic fallback producer. Without an
/// API key the network is skipped entirely.
pub struct SummaryClient {
    client: Client,
    chat_url: Url,
    api_key: Option<String>,
    model: String,
}

impl SummaryClient {
    /// Creates a new client against the given API base URL (the
    /// `/chat/completions` path is appended here).
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SummaryError::InvalidUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, SummaryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("devscope/0.1 (profile-aggregation)")
            .build()?;

        let raw = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        let chat_url = Url::parse(&raw)
            .map_err(|e| SummaryError::InvalidUrl(format!("base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            chat_url,
            api_key,
            model: model.to_string(),
        })
    }

    /// Produce a summary for the gathered profiles.
    ///
    /// Optional sources are `Some` when a handle was supplied for them
    /// (even if their fetch degraded to zero values), `None` when the user
    /// never asked for that source.
    pub async fn summarize(
        &self,
        github: &GitHubProfile,
        linkedin: Option<&LinkedInProfile>,
        leetcode: Option<&LeetCodeProfile>,
    ) -> SummaryResult {
        match self.try_summarize(github, linkedin, leetcode).await {
            Ok(summary) => summary,
            Err(SummaryError::MissingCredentials) => {
                tracing::info!("no summarization API key configured, using deterministic summary");
                compute_fallback(github, leetcode)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "summarization endpoint failed, using deterministic summary"
                );
                compute_fallback(github, leetcode)
            }
        }
    }

    /// The primary path: one prompt, one completion request, one parse.
    ///
    /// # Errors
    ///
    /// Every failure class on this path; see [`SummaryError`].
    async fn try_summarize(
        &self,
        github: &GitHubProfile,
        linkedin: Option<&LinkedInProfile>,
        leetcode: Option<&LeetCodeProfile>,
    ) -> Result<SummaryResult, SummaryError> {
        let Some(api_key) = &self.api_key else {
            return Err(SummaryError::MissingCredentials);
        };

        let prompt = build_prompt(github, linkedin, leetcode);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(self.chat_url.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.chat_url.to_string(),
            });
        }

        let body = response.text().await?;
        let completion: ChatResponse =
            serde_json::from_str(&body).map_err(|e| SummaryError::Deserialize {
                context: "chat completion envelope".to_string(),
                source: e,
            })?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(SummaryError::EmptyCompletion)?;

        parse_summary(&content)
    }
}
