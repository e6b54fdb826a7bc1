//! Shared error types for the engine
//!
//! Diagnosable user mistakes are *not* errors; they are reported through
//! [`crate::diagnostics`]. This module covers the truly-invalid-input
//! conditions a host should never produce, plus boundary failures of the
//! debug CLI.

use crate::core::SourceLocation;
use thiserror::Error;

/// Main error type for dualization operations
#[derive(Debug, Error)]
pub enum Error {
    /// The host handed over a structurally impossible declaration tree
    #[error("Malformed declaration tree: {message}")]
    MalformedTree {
        message: String,
        location: Option<SourceLocation>,
    },

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-tree error with an optional location
    pub fn malformed_tree(message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self::MalformedTree {
            message: message.into(),
            location,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
