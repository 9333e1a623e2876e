//! Client error types.

/// Failures talking to the recipe API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a readable response.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response without the expected payload.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ClientError {
    /// Message reported by the server, if the failure came from one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
