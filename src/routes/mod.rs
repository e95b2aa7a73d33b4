//! HTTP route handlers.
//!
//! Two fixed routes. Unknown paths and wrong methods fall through to axum's
//! default 404 and 405 responses.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        // Health check - liveness probe for container orchestration
        .route(health::HEALTH_PATH, get(health::health))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
