//! Error types for itemcheck.
//!
//! Library crates use [`ItemCheckError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all itemcheck operations.
#[derive(Debug, thiserror::Error)]
pub enum ItemCheckError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The checklist JSON file is missing.
    #[error("checklist not found at {path:?}")]
    ChecklistNotFound { path: PathBuf },

    /// The checklist JSON file exists but cannot be parsed.
    #[error("checklist file is corrupted: {message}")]
    ChecklistCorrupt { message: String },

    /// The input document produced no usable text.
    #[error("no content found: {message}")]
    NoContent { message: String },

    /// LLM invocation error (HTTP, API, or response shape).
    #[error("LLM call failed: {0}")]
    Llm(String),

    /// Report generation or packaging error.
    #[error("report error: {0}")]
    Report(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ItemCheckError>;

impl ItemCheckError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a no-content error from any displayable message.
    pub fn no_content(msg: impl Into<String>) -> Self {
        Self::NoContent {
            message: msg.into(),
        }
    }

    /// Create a report error from any displayable message.
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
