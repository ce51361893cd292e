use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in artsearch
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, CatalogError>;
