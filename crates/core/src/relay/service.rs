//! Relay orchestration service.

use std::sync::Arc;

use relay_shared::DeliveryConfig;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::encoding::{display_filename, encode_attachment};
use super::error::RelayError;
use super::types::{ContactSubmission, RelayReceipt};
use crate::delivery::{DeliveryError, EmailAttachment, OutboundEmail};
use crate::storage::StorageError;

/// Storage collaborator supplying uploaded attachment blobs.
///
/// Implemented by [`crate::storage::BlobStore`] in production; tests
/// substitute in-memory fakes.
pub trait AttachmentStore: Send + Sync {
    /// Fetch the raw bytes of one uploaded blob.
    fn download(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, StorageError>> + Send;

    /// Remove a set of uploaded blobs.
    fn remove_all(
        &self,
        keys: &[String],
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}

/// Delivery collaborator sending the composed email.
///
/// Implemented by [`crate::delivery::DeliveryClient`] in production.
pub trait Mailer: Send + Sync {
    /// Send one email, returning the provider's raw JSON receipt.
    fn send(
        &self,
        email: &OutboundEmail,
    ) -> impl std::future::Future<Output = Result<Value, DeliveryError>> + Send;
}

/// Relays contact-form submissions to the site owner by email.
///
/// One instance is built at process start and shared across requests;
/// each invocation is independent and holds no mutable state.
pub struct ContactRelay<S, M> {
    store: Arc<S>,
    mailer: Arc<M>,
    from_address: String,
    owner_address: String,
}

impl<S, M> ContactRelay<S, M>
where
    S: AttachmentStore + 'static,
    M: Mailer,
{
    /// Creates a relay over the given collaborators.
    #[must_use]
    pub fn new(store: Arc<S>, mailer: Arc<M>, config: &DeliveryConfig) -> Self {
        Self {
            store,
            mailer,
            from_address: config.from_address.clone(),
            owner_address: config.owner_address.clone(),
        }
    }

    /// Relays one submission: resolves attachments, sends the owner
    /// email, then schedules removal of the uploaded blobs.
    ///
    /// At most one email is sent per invocation. Attachment resolution
    /// is best-effort: a key that cannot be fetched is logged and
    /// skipped. Cleanup runs on a detached task after a successful
    /// send and never delays or alters the response.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Delivery`] when the provider call fails;
    /// no cleanup is scheduled in that case.
    pub async fn handle(&self, submission: ContactSubmission) -> Result<RelayReceipt, RelayError> {
        let attachments = self.resolve_attachments(&submission.attachment_paths).await;

        let email = OutboundEmail {
            from: self.from_address.clone(),
            to: vec![self.owner_address.clone()],
            subject: format!("New contact: {}", submission.subject),
            html: render_owner_email(&submission, attachments.len()),
            attachments,
        };

        let receipt = self.mailer.send(&email).await?;
        info!(subject = %submission.subject, "contact email delivered to owner");

        if !submission.attachment_paths.is_empty() {
            self.schedule_cleanup(submission.attachment_paths);
        }

        Ok(RelayReceipt {
            owner_email: receipt,
        })
    }

    /// Resolves the referenced blobs in input order, skipping keys
    /// that cannot be fetched.
    async fn resolve_attachments(&self, keys: &[String]) -> Vec<EmailAttachment> {
        let mut attachments = Vec::with_capacity(keys.len());

        for key in keys {
            match self.store.download(key).await {
                Ok(bytes) => {
                    let filename = display_filename(key);
                    debug!(%key, %filename, size = bytes.len(), "attachment resolved");
                    attachments.push(EmailAttachment {
                        filename,
                        content: encode_attachment(&bytes),
                    });
                }
                Err(err) => {
                    warn!(%key, error = %err, "skipping attachment that could not be fetched");
                }
            }
        }

        attachments
    }

    /// Removes the uploaded blobs on a detached task. The outcome is
    /// only logged; the response has already been decided.
    fn schedule_cleanup(&self, keys: Vec<String>) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store.remove_all(&keys).await {
                Ok(()) => debug!(count = keys.len(), "uploaded attachments removed"),
                Err(err) => warn!(error = %err, "failed to remove uploaded attachments"),
            }
        });
    }
}

/// Renders the HTML body of the owner notification email.
pub(crate) fn render_owner_email(submission: &ContactSubmission, attachment_count: usize) -> String {
    let attachment_note = if attachment_count > 0 {
        format!("<p><strong>Attachments:</strong> {attachment_count} file(s) attached</p>\n\n")
    } else {
        String::new()
    };

    format!(
        r#"<h2>New message from the site contact form</h2>

<p><strong>Name:</strong> {first_name} {last_name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Subject:</strong> {subject}</p>

<h3>Message:</h3>
<p style="white-space: pre-wrap;">{message}</p>

{attachment_note}<hr />
<p style="color: #666; font-size: 12px;">
  This message was sent through the website contact form.
</p>"#,
        first_name = submission.first_name,
        last_name = submission.last_name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
    )
}
