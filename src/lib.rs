//! hello-service: a greeting and health-check HTTP service.
//!
//! Serves a fixed greeting on `/` and a liveness message on `/health`,
//! built on Axum with request tracing and graceful shutdown.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::Error;
pub use routes::create_router;
