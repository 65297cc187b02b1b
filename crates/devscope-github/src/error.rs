use thiserror::Error;

/// Errors returned by the GitHub API client.
///
/// GitHub is the required source: none of these are absorbed internally,
/// they all propagate to the aggregation pipeline and abort it.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API reported that the login does not exist.
    #[error("GitHub user not found: {login}")]
    NotFound { login: String },

    /// A non-2xx status other than 404.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured base URL (or a path built from it) is not valid.
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
