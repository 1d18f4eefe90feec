//! Error types for Annals operations.
//!
//! This module provides the main error type [`AnnalsError`] which wraps
//! the error conditions that can occur while turning a dataset into a
//! network layout.

use std::io;

use thiserror::Error;

use annals_core::matrix::MatrixError;

/// The main error type for Annals operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the dataset source next to the JSON error, so
/// callers can point at the offending line and column.
#[derive(Debug, Error)]
pub enum AnnalsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dataset: {err}")]
    Input { err: serde_json::Error, src: String },

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(serde_json::Error),
}

impl AnnalsError {
    /// Create a new `Input` error with the associated dataset source.
    pub fn new_input_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}
