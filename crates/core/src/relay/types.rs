//! Submission and receipt types.

use serde::Deserialize;
use serde_json::Value;

/// A contact-form submission as posted by the site.
///
/// Field values are relayed uninterpreted; the form is expected to
/// validate before submitting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Sender first name.
    pub first_name: String,
    /// Sender last name.
    pub last_name: String,
    /// Sender reply address.
    pub email: String,
    /// Subject line chosen by the sender.
    pub subject: String,
    /// Free-form message body.
    pub message: String,
    /// Storage keys of files uploaded alongside the submission.
    #[serde(default)]
    pub attachment_paths: Vec<String>,
}

/// Receipt for a relayed submission.
#[derive(Debug, Clone)]
pub struct RelayReceipt {
    /// Opaque response returned by the delivery provider.
    pub owner_email: Value,
}
