use thiserror::Error;

/// Errors returned by the LeetCode client.
///
/// None of these are fatal to a profile build; the aggregator converts
/// them into a degraded, zero-valued profile.
#[derive(Debug, Error)]
pub enum LeetCodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A configured endpoint URL (or a path built from it) is not valid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The username is unknown to the platform (GraphQL `matchedUser` was
    /// null, or the stats proxy reported an error status).
    #[error("LeetCode user not found: {username}")]
    UserNotFound { username: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
