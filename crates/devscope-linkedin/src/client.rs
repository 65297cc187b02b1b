//! HTTP client for the LinkedIn scraping proxy.

use std::time::Duration;

use devscope_core::LinkedInProfile;
use reqwest::{Client, Url};

use crate::error::LinkedInError;
use crate::normalize::normalize_profile;
use crate::types::RawLinkedInProfile;

/// Client for the LinkedIn scraping proxy.
///
/// The proxy takes the full public-profile URL as a query parameter and an
/// optional access token. Construction mirrors the other platform clients:
/// [`LinkedInClient::new`] against a configured proxy, same signature for
/// tests with a wiremock URI.
pub struct LinkedInClient {
    client: Client,
    proxy_url: Url,
    token: Option<String>,
}

impl LinkedInClient {
    /// Creates a new client against the given proxy endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LinkedInError::InvalidUrl`] if
    /// `proxy_url` is not a valid URL.
    pub fn new(
        proxy_url: &str,
        token: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, LinkedInError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("devscope/0.1 (profile-aggregation)")
            .build()?;

        let proxy_url = Url::parse(proxy_url)
            .map_err(|e| LinkedInError::InvalidUrl(format!("proxy URL '{proxy_url}': {e}")))?;

        Ok(Self {
            client,
            proxy_url,
            token,
        })
    }

    /// Fetches and normalizes the public profile for a handle.
    ///
    /// # Errors
    ///
    /// - [`LinkedInError::Http`] on network failure.
    /// - [`LinkedInError::UnexpectedStatus`] on a non-2xx proxy status.
    /// - [`LinkedInError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_profile(&self, handle: &str) -> Result<LinkedInProfile, LinkedInError> {
        let url = self.build_url(handle);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LinkedInError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let raw: RawLinkedInProfile =
            serde_json::from_str(&body).map_err(|e| LinkedInError::Deserialize {
                context: format!("linkedin profile for {handle}"),
                source: e,
            })?;
        Ok(normalize_profile(handle, raw))
    }

    /// Builds the proxy request URL: the profile URL as a query parameter,
    /// plus the token when one is configured.
    fn build_url(&self, handle: &str) -> Url {
        let mut url = self.proxy_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(token) = &self.token {
                pairs.append_pair("token", token);
            }
            pairs.append_pair("url", &format!("https://linkedin.com/in/{handle}"));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_embeds_profile_url_and_token() {
        let client = LinkedInClient::new(
            "https://proxy.example/linkedin",
            Some("tok".to_string()),
            30,
        )
        .expect("client");
        let url = client.build_url("jane-doe");
        assert_eq!(
            url.as_str(),
            "https://proxy.example/linkedin?token=tok&url=https%3A%2F%2Flinkedin.com%2Fin%2Fjane-doe"
        );
    }

    #[test]
    fn build_url_without_token_omits_it() {
        let client =
            LinkedInClient::new("https://proxy.example/linkedin", None, 30).expect("client");
        let url = client.build_url("jane-doe");
        assert!(!url.as_str().contains("token="));
    }
}
