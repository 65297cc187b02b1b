use std::net::SocketAddr;

/// Application configuration, loaded from environment variables.
///
/// All upstream endpoints are configurable so tests and self-hosted proxies
/// can point the clients anywhere; credentials are always optional and never
/// appear in `Debug` output.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub linkedin_proxy_url: String,
    pub linkedin_proxy_token: Option<String>,
    pub leetcode_graphql_url: String,
    pub leetcode_stats_url: String,
    pub summary_api_url: String,
    pub summary_api_key: Option<String>,
    pub summary_model: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("github_api_url", &self.github_api_url)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[redacted]"),
            )
            .field("linkedin_proxy_url", &self.linkedin_proxy_url)
            .field(
                "linkedin_proxy_token",
                &self.linkedin_proxy_token.as_ref().map(|_| "[redacted]"),
            )
            .field("leetcode_graphql_url", &self.leetcode_graphql_url)
            .field("leetcode_stats_url", &self.leetcode_stats_url)
            .field("summary_api_url", &self.summary_api_url)
            .field(
                "summary_api_key",
                &self.summary_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("summary_model", &self.summary_model)
            .finish()
    }
}
