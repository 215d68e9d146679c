//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The contact relay route
//! - A health check route
//! - CORS and request tracing layers

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use relay_core::relay::{AttachmentStore, ContactRelay, Mailer};

/// Application state shared across handlers.
///
/// Generic over the relay's collaborators so router tests can drive
/// fakes end to end.
pub struct AppState<S, M> {
    /// Relay service handling contact submissions.
    pub relay: Arc<ContactRelay<S, M>>,
}

impl<S, M> Clone for AppState<S, M> {
    fn clone(&self) -> Self {
        Self {
            relay: Arc::clone(&self.relay),
        }
    }
}

/// Creates the main application router.
///
/// Every response carries permissive CORS headers; preflight `OPTIONS`
/// requests are answered by the CORS layer with an empty body.
pub fn create_router<S, M>(state: AppState<S, M>) -> Router
where
    S: AttachmentStore + 'static,
    M: Mailer + 'static,
{
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
