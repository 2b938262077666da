//! Error types for the lab adventure

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdventureError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid script format: {0}")]
    InvalidScript(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdventureError>;
