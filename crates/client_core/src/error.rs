use thiserror::Error;

/// Failure taxonomy for every data-access operation.
///
/// Nothing here is fatal and nothing is retried automatically; controllers
/// reduce each variant to display text and leave the screen retryable.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The transport never produced a well-formed response (connection
    /// refused, timeout, body decode failure).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a failure envelope or bare error status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    /// Rejected client-side before any network call was made.
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// Text shown to the user when a screen lands in its error state.
    pub fn display_message(&self) -> String {
        let text = match self {
            ClientError::Network(message) => message,
            ClientError::Api { message, .. } => message,
            ClientError::Validation(message) => message,
        };
        if text.trim().is_empty() {
            "unknown error".to_string()
        } else {
            text.clone()
        }
    }
}
