//! Error types for the fantasy football draft assistant

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Could not determine a data directory; set {env_var}")]
    MissingDataDir { env_var: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Invalid position requirements: {message}")]
    InvalidRequirements { message: String },
}

impl From<anyhow::Error> for DraftError {
    fn from(err: anyhow::Error) -> Self {
        DraftError::Storage {
            message: err.to_string(),
        }
    }
}
