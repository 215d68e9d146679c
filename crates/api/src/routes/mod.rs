//! API route definitions.

use axum::Router;

use crate::AppState;
use relay_core::relay::{AttachmentStore, Mailer};

pub mod contact;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes<S, M>() -> Router<AppState<S, M>>
where
    S: AttachmentStore + 'static,
    M: Mailer + 'static,
{
    Router::new()
        .merge(health::routes())
        .merge(contact::routes())
}
