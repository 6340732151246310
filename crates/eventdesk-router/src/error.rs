//! Router error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Invalid route path: {0}")]
    InvalidPath(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
