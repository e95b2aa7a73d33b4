//! HTTP server module.
//!
//! Plain HTTP only. The server includes graceful shutdown on SIGTERM/SIGINT
//! with a configurable drain timeout.

mod server;
mod shutdown;

pub use axum_server::Handle;
pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
