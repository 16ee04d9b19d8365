use crate::model::AppState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MasalError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Story generation failed: {0}")]
    Generation(String),

    #[error("Story not found: {0}")]
    StoryNotFound(String),

    #[error("Library is still loading")]
    NotLoaded,

    #[error("Cannot {command} while in {state} state")]
    InvalidTransition {
        state: AppState,
        command: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MasalError>;
