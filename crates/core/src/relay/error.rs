//! Relay error types.

use thiserror::Error;

use crate::delivery::DeliveryError;

/// Errors that abort a relay invocation.
///
/// Individual attachment lookup failures are not represented here:
/// they are logged and swallowed inside the resolution loop and never
/// fail the request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The submission payload was missing or unparseable.
    #[error("invalid submission: {0}")]
    InvalidRequest(String),

    /// The delivery provider refused or failed the send.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
