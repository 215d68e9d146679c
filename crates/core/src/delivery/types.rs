//! Wire types for the delivery provider API.

use serde::Serialize;

/// A composed email ready to hand to the delivery provider.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    /// From address, e.g. `Contact Form <onboarding@resend.dev>`.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Inline attachments; omitted from the payload when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<EmailAttachment>,
}

/// A resolved attachment, base64-encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAttachment {
    /// Display filename shown in the delivered email.
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
}
