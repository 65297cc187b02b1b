use thiserror::Error;

/// Errors on the primary summarization path.
///
/// None of these ever cross the crate boundary as failures: the client
/// resolves all of them by switching to the deterministic fallback
/// producer. They exist so the switch can be logged with a cause.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// No API key configured; the network is not even attempted.
    #[error("no summarization API key configured")]
    MissingCredentials,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured base URL is not valid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The completion response carried no choices.
    #[error("completion response contained no choices")]
    EmptyCompletion,

    /// The completion text was not parseable as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed structure was missing a required field.
    #[error("summary validation failed: {0}")]
    Validation(String),
}
