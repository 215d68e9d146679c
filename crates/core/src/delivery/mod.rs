//! Email delivery through a Resend-compatible HTTP provider.
//!
//! The provider accepts one JSON request per email and returns an
//! opaque JSON receipt. Attachments travel inline as base64 text.

mod client;
mod error;
mod types;

pub use client::DeliveryClient;
pub use error::DeliveryError;
pub use types::{EmailAttachment, OutboundEmail};
