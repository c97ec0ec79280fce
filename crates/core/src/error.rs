//! Error types for the subword tokenizer library.
//!
//! The segmentation algorithms themselves never fail: an uncovered position
//! yields the unknown-token sentinel and an exhausted merge loop simply stops.
//! These errors cover configuration, vocabulary validation and file IO.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vocabulary entry carried a NaN or infinite log-probability
    #[error("Invalid log-probability {log_prob} for token '{token}'")]
    InvalidLogProb { token: String, log_prob: f64 },

    /// A vocabulary entry was the empty string
    #[error("Vocabulary tokens must not be empty")]
    EmptyToken,

    /// Error loading a vocabulary
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a vocabulary
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
