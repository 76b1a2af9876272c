//! Error types for Sequin operations.
//!
//! This module provides the main error type [`SequinError`]. The invocation
//! renderer itself is infallible; errors come from the boundaries around it:
//! parsing a scene, loading configuration and resolving a scene into view
//! states.

use std::io;

use thiserror::Error;

/// The main error type for Sequin operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the scene source next to the TOML error so that
/// callers can render the offending span.
#[derive(Debug, Error)]
pub enum SequinError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", err.message())]
    Parse { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Invocation #{index} targets unknown endpoint `{endpoint}`")]
    UnknownEndpoint { index: usize, endpoint: String },

    #[error("Invalid bounding box for {what}: width and height must be non-negative")]
    InvalidBounds { what: String },
}

impl SequinError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
