//! World-state errors

use thiserror::Error;

/// Backend failures surfaced by `StateStore` implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("state read failed for key {key}: {message}")]
    Read { key: String, message: String },

    #[error("state write failed for key {key}: {message}")]
    Write { key: String, message: String },
}
