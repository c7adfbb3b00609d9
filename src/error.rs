use thiserror::Error;

/// Failure of one outbound call to a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is not configured")]
    MissingKey(&'static str),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache metadata error: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Rejected inbound request body or query.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("{field} may only contain letters, digits, '-' and '_'")]
    InvalidId { field: &'static str },
    #[error("unknown mood '{0}', expected chill, energetic or adventurous")]
    UnknownMood(String),
}
