/// Errors that can occur while generating a description.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("API key rejected (HTTP {0})")]
    InvalidCredentials(u16),

    #[error("Rate limited by the generation API")]
    RateLimit,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Response contained no text")]
    Empty,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
