//! Contact form relay route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::AppState;
use relay_core::relay::{AttachmentStore, ContactSubmission, Mailer, RelayError};

/// Creates the contact routes.
pub fn routes<S, M>() -> Router<AppState<S, M>>
where
    S: AttachmentStore + 'static,
    M: Mailer + 'static,
{
    Router::new().route("/contact", post(submit_contact))
}

/// Response body for a relayed submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Opaque delivery-provider response.
    pub owner_email: Value,
}

/// POST /contact - relay a submission to the site owner.
///
/// The body is extracted as a `Result` so that malformed payloads are
/// rejected before any storage or delivery call is made.
async fn submit_contact<S, M>(
    State(state): State<AppState<S, M>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> axum::response::Response
where
    S: AttachmentStore + 'static,
    M: Mailer + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "rejected malformed contact submission");
            return error_response(&RelayError::InvalidRequest(rejection.body_text()));
        }
    };

    match state.relay.handle(submission).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(ContactResponse {
                success: true,
                owner_email: receipt.owner_email,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to relay contact submission");
            error_response(&e)
        }
    }
}

/// Converts a relay error into the `{error, details}` failure body.
fn error_response(err: &RelayError) -> axum::response::Response {
    let (status, error, details) = match err {
        RelayError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_request", msg.clone()),
        RelayError::Delivery(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "delivery_failed",
            e.to_string(),
        ),
    };

    (
        status,
        Json(json!({
            "error": error,
            "details": details
        })),
    )
        .into_response()
}
