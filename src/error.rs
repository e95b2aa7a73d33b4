//! Startup errors.
//!
//! Requests themselves cannot fail; everything that can go wrong happens
//! while loading configuration or bringing the listener up.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
