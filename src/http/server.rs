//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;
use crate::error::Error;

use super::shutdown;

/// Bind or serve failure
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down. An invalid listen
/// address is reported as the underlying configuration error.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), Error> {
    let addr = config.http.socket_addr()?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), config.http.shutdown_timeout());

    serve(app, addr, handle).await?;
    Ok(())
}

/// Bind `addr` and serve `app` until `handle` is shut down.
///
/// Callers learn the bound address (useful with port 0) through
/// [`Handle::listening`].
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
