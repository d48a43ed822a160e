use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur while loading or validating FAQ data
#[derive(Error, Debug)]
pub enum FaqError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, FaqError>;
