use thiserror::Error;

/// Errors returned by the LinkedIn proxy client.
///
/// None of these are fatal to a profile build; the aggregator converts
/// them into a degraded, zero-valued profile.
#[derive(Debug, Error)]
pub enum LinkedInError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The proxy answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured proxy URL is not valid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
