//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Docker, Kubernetes and load balancers to verify the service is alive.

/// Path polled by orchestrators.
pub const HEALTH_PATH: &str = "/health";

/// Body returned by the liveness probe.
pub const HEALTH_STATUS: &str = "Server is up and running";

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> &'static str {
    HEALTH_STATUS
}
