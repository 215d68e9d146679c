//! Delivery error types.

use thiserror::Error;

/// Email delivery errors.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider could not be reached.
    #[error("failed to reach delivery provider: {0}")]
    Transport(String),

    /// The provider refused the message.
    #[error("delivery provider rejected the message ({status}): {message}")]
    Provider {
        /// HTTP status returned by the provider.
        status: u16,
        /// Provider error body, verbatim.
        message: String,
    },

    /// The provider's success response could not be decoded.
    #[error("failed to decode provider response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
