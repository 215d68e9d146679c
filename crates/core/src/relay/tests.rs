//! Relay service tests with fake collaborators.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use super::service::render_owner_email;
use super::{AttachmentStore, ContactRelay, ContactSubmission, Mailer, RelayError};
use crate::delivery::{DeliveryError, OutboundEmail};
use crate::storage::StorageError;
use relay_shared::DeliveryConfig;

/// In-memory attachment store that records every call.
#[derive(Default)]
struct FakeStore {
    blobs: HashMap<String, Vec<u8>>,
    downloads: Mutex<Vec<String>>,
    removed: Mutex<Vec<Vec<String>>>,
    fail_removal: bool,
}

impl FakeStore {
    fn with_blobs(blobs: &[(&str, &[u8])]) -> Self {
        Self {
            blobs: blobs
                .iter()
                .map(|(key, bytes)| ((*key).to_string(), bytes.to_vec()))
                .collect(),
            ..Self::default()
        }
    }
}

impl AttachmentStore for FakeStore {
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.downloads.lock().unwrap().push(key.to_string());
        self.blobs
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::not_found(key))
    }

    async fn remove_all(&self, keys: &[String]) -> Result<(), StorageError> {
        self.removed.lock().unwrap().push(keys.to_vec());
        if self.fail_removal {
            return Err(StorageError::operation("bucket unavailable"));
        }
        Ok(())
    }
}

/// Mailer that captures sent emails and can be told to fail.
#[derive(Default)]
struct FakeMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl Mailer for FakeMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<Value, DeliveryError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(DeliveryError::Provider {
                status: 422,
                message: "from address not verified".to_string(),
            });
        }
        Ok(json!({ "id": "rcpt_123" }))
    }
}

fn delivery_config() -> DeliveryConfig {
    DeliveryConfig {
        api_url: "https://api.resend.com/emails".to_string(),
        api_key: "re_test".to_string(),
        from_address: "Contact Form <onboarding@resend.dev>".to_string(),
        owner_address: "owner@example.com".to_string(),
    }
}

fn relay_with(
    store: FakeStore,
    mailer: FakeMailer,
) -> (
    Arc<FakeStore>,
    Arc<FakeMailer>,
    ContactRelay<FakeStore, FakeMailer>,
) {
    let store = Arc::new(store);
    let mailer = Arc::new(mailer);
    let relay = ContactRelay::new(Arc::clone(&store), Arc::clone(&mailer), &delivery_config());
    (store, mailer, relay)
}

fn submission(paths: &[&str]) -> ContactSubmission {
    ContactSubmission {
        first_name: "Ana".to_string(),
        last_name: "Costa".to_string(),
        email: "ana@x.com".to_string(),
        subject: "Quote request".to_string(),
        message: "Hello".to_string(),
        attachment_paths: paths.iter().map(|p| (*p).to_string()).collect(),
    }
}

/// Gives detached cleanup tasks a chance to run to completion.
async fn drain_background_tasks() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_no_attachments_sends_exactly_one_email() {
    let (store, mailer, relay) = relay_with(FakeStore::default(), FakeMailer::default());

    let receipt = relay.handle(submission(&[])).await.expect("should relay");
    drain_background_tasks().await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].attachments.is_empty());
    assert_eq!(sent[0].to, vec!["owner@example.com"]);
    assert_eq!(sent[0].subject, "New contact: Quote request");
    assert_eq!(receipt.owner_email, json!({ "id": "rcpt_123" }));

    // Nothing was referenced, so nothing is removed.
    assert!(store.removed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_partial_resolution_keeps_order_and_still_sends() {
    let store = FakeStore::with_blobs(&[("t1-a.pdf", b"aaa".as_slice()), ("t3-c.png", b"ccc".as_slice())]);
    let (_, mailer, relay) = relay_with(store, FakeMailer::default());

    relay
        .handle(submission(&["t1-a.pdf", "t2-b.pdf", "t3-c.png"]))
        .await
        .expect("one bad attachment must not fail the request");
    drain_background_tasks().await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let filenames: Vec<&str> = sent[0]
        .attachments
        .iter()
        .map(|a| a.filename.as_str())
        .collect();
    assert_eq!(filenames, vec!["a.pdf", "c.png"]);
}

#[tokio::test]
async fn test_no_resolvable_attachments_still_sends() {
    let (store, mailer, relay) = relay_with(FakeStore::default(), FakeMailer::default());

    relay
        .handle(submission(&["t1-a.pdf", "t2-b.pdf"]))
        .await
        .expect("should relay");
    drain_background_tasks().await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].attachments.is_empty());

    // Cleanup still covers the full original key set.
    let removed = store.removed.lock().unwrap();
    assert_eq!(
        *removed,
        vec![vec!["t1-a.pdf".to_string(), "t2-b.pdf".to_string()]]
    );
}

#[tokio::test]
async fn test_delivery_failure_surfaces_and_skips_cleanup() {
    let store = FakeStore::with_blobs(&[("t1-a.pdf", b"aaa".as_slice())]);
    let mailer = FakeMailer {
        fail: true,
        ..FakeMailer::default()
    };
    let (store, mailer, relay) = relay_with(store, mailer);

    let err = relay
        .handle(submission(&["t1-a.pdf"]))
        .await
        .expect_err("delivery failure is fatal");
    drain_background_tasks().await;

    assert!(matches!(
        err,
        RelayError::Delivery(DeliveryError::Provider { status: 422, .. })
    ));
    assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    assert!(store.removed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_example_scenario_partial_attachments() {
    let store = FakeStore::with_blobs(&[("t1-doc.pdf", b"%PDF-1.4".as_slice())]);
    let (store, mailer, relay) = relay_with(store, FakeMailer::default());

    let mut submission = submission(&["t1-doc.pdf", "t2-missing.pdf"]);
    submission.subject = "Or\u{e7}amento".to_string();
    submission.message = "Ol\u{e1}".to_string();

    let receipt = relay.handle(submission).await.expect("should relay");
    drain_background_tasks().await;

    assert_eq!(receipt.owner_email, json!({ "id": "rcpt_123" }));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].filename, "doc.pdf");

    let removed = store.removed.lock().unwrap();
    assert_eq!(
        *removed,
        vec![vec!["t1-doc.pdf".to_string(), "t2-missing.pdf".to_string()]]
    );
}

#[tokio::test]
async fn test_cleanup_failure_does_not_affect_receipt() {
    let mut store = FakeStore::with_blobs(&[("t1-a.pdf", b"aaa".as_slice())]);
    store.fail_removal = true;
    let (store, _, relay) = relay_with(store, FakeMailer::default());

    let receipt = relay
        .handle(submission(&["t1-a.pdf"]))
        .await
        .expect("cleanup failure is invisible to the caller");
    drain_background_tasks().await;

    assert_eq!(receipt.owner_email, json!({ "id": "rcpt_123" }));
    assert_eq!(store.removed.lock().unwrap().len(), 1);
}

#[test]
fn test_render_owner_email_embeds_submission_fields() {
    let html = render_owner_email(&submission(&[]), 0);

    assert!(html.contains("Ana Costa"));
    assert!(html.contains("ana@x.com"));
    assert!(html.contains("Quote request"));
    assert!(html.contains("Hello"));
    assert!(!html.contains("Attachments:"));
}

#[test]
fn test_render_owner_email_annotates_attachment_count() {
    let html = render_owner_email(&submission(&[]), 2);

    assert!(html.contains("<strong>Attachments:</strong> 2 file(s) attached"));
}
