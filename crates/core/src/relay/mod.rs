//! The contact relay.
//!
//! Turns one contact-form submission into one delivered email:
//! - Resolve referenced attachment blobs from storage (best-effort)
//! - Send a single HTML email to the site owner
//! - Schedule removal of the uploaded blobs in the background

mod encoding;
mod error;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use encoding::{display_filename, encode_attachment};
pub use error::RelayError;
pub use service::{AttachmentStore, ContactRelay, Mailer};
pub use types::{ContactSubmission, RelayReceipt};
