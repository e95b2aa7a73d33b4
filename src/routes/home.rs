//! Root greeting handler.

pub const GREETING: &str = "Hello Developers, Welcome to Dockerized Flask App!";

pub async fn index() -> &'static str {
    GREETING
}
