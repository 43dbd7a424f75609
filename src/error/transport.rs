use thiserror::Error;

/// Failures talking to Discord or fetching remote content.
///
/// Transport failures are recoverable: the affected operation is skipped and logged.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Remote server answered a content fetch with a non-success status.
    #[error("Failed to fetch {url}: {status}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// HTTP status returned by the server
        status: reqwest::StatusCode,
    },

    /// Operation did not complete within the configured timeout.
    #[error("Timed out after {seconds}s: {operation}")]
    Timeout {
        /// What was being attempted (URL or action name)
        operation: String,
        /// Timeout that elapsed
        seconds: u64,
    },

    /// Discord API error from Serenity.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Filesystem error while persisting fetched content.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The gateway shard manager has not been attached yet.
    #[error("Gateway is not connected")]
    NotConnected,
}

impl From<serenity::Error> for TransportError {
    fn from(err: serenity::Error) -> Self {
        TransportError::Discord(Box::new(err))
    }
}
