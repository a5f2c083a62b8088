//! Error types for the Places backend client.
//!
//! Every variant's message is shown to the user verbatim after the localized
//! error prefix, so messages stay short and free of debug formatting.

/// Errors that can occur while calling the backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, trimmed.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode(source.to_string())
    }
}
