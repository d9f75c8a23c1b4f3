use std::path::PathBuf;

use valkyrie_core::model::SelectionError;

#[derive(thiserror::Error, Debug)]
pub enum ValkyrieError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog response for '{short_name}' has no usable '{header}' header: {message}")]
    InvalidHitCount {
        short_name: String,
        header: &'static str,
        message: String,
    },
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Serializing result into JSON failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}
