//! End-to-end tests against a real server on an ephemeral port.
//!
//! Run with: cargo test --test http_tests
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::time::Duration;

use hello_service::config::{AppConfig, ConfigError};
use hello_service::http::{serve, start_server, Handle};
use hello_service::{create_router, Error};
use reqwest::StatusCode;
use tokio::task::JoinHandle;

const GREETING: &str = "Hello Developers, Welcome to Dockerized Flask App!";
const HEALTH_STATUS: &str = "Server is up and running";

struct TestServer {
    addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<Result<(), hello_service::http::ServerError>>,
}

impl TestServer {
    /// Start the server on 127.0.0.1 with an OS-assigned port
    async fn spawn() -> Self {
        let handle = Handle::new();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let task = tokio::spawn(serve(create_router(), addr, handle.clone()));

        let addr = handle
            .listening()
            .await
            .expect("Server failed to bind");

        Self { addr, handle, task }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(self.url(path))
            .await
            .expect("Failed to execute request.")
    }
}

#[tokio::test]
async fn root_returns_greeting() {
    let server = TestServer::spawn().await;

    let response = server.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), GREETING);
}

#[tokio::test]
async fn health_check_works() {
    let server = TestServer::spawn().await;

    let response = server.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        Some(HEALTH_STATUS.len() as u64),
        response.content_length()
    );
    assert_eq!(response.text().await.unwrap(), HEALTH_STATUS);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::spawn().await;

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .post(server.url("/"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn head_is_answered_without_body() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .head(server.url("/health"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn responses_are_identical_across_calls() {
    let server = TestServer::spawn().await;

    for _ in 0..5 {
        let root = server.get("/").await;
        assert_eq!(root.status(), StatusCode::OK);
        assert_eq!(root.text().await.unwrap(), GREETING);

        let health = server.get("/health").await;
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(health.text().await.unwrap(), HEALTH_STATUS);
    }
}

#[tokio::test]
async fn full_scenario() {
    let server = TestServer::spawn().await;

    let root = server.get("/").await;
    assert_eq!(root.text().await.unwrap(), GREETING);

    let health = server.get("/health").await;
    assert_eq!(health.text().await.unwrap(), HEALTH_STATUS);

    let missing = server.get("/missing").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn graceful_shutdown_stops_server() {
    let server = TestServer::spawn().await;
    assert_eq!(server.get("/health").await.status(), StatusCode::OK);
    let health_url = server.url("/health");

    server.handle.graceful_shutdown(Some(Duration::from_secs(1)));

    let result = tokio::time::timeout(Duration::from_secs(5), server.task)
        .await
        .expect("Server did not stop within timeout")
        .expect("Server task panicked");
    assert!(result.is_ok());

    assert!(reqwest::get(health_url).await.is_err());
}

#[tokio::test]
async fn responses_carry_only_default_headers() {
    let server = TestServer::spawn().await;

    for path in ["/", "/health"] {
        let response = server.get(path).await;
        assert_eq!(response.status(), StatusCode::OK);

        let names: BTreeSet<&str> = response.headers().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            BTreeSet::from(["content-length", "content-type", "date"]),
            "unexpected headers on {}",
            path
        );
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}

#[tokio::test]
async fn invalid_listen_address_reports_config_error() {
    let mut config = AppConfig::default();
    config.http.host = "localhost".to_string();
    config.http.port = 0;

    let err = start_server(create_router(), &config).await.unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::Validation(_))));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid http.host or http.port (localhost:0): invalid socket address syntax"
    );
}
