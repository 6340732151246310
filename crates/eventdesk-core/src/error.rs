//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Router error: {0}")]
    Router(#[from] eventdesk_router::RouterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid proxy rule: {0}")]
    InvalidProxyRule(String),

    #[error("Route {path} is shadowed by proxy prefix {prefix}")]
    RouteShadowed { path: String, prefix: String },
}
