//! Error types for metabase generation.
//!
//! Only loading the declaration tree and emitting the document can fail;
//! traversal itself reports problems as [`crate::diagnostics::Diagnostic`]s.

use thiserror::Error;

/// Errors that abort a generator run.
#[derive(Debug, Error)]
pub enum MetabaseError {
    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Input parsed but is not a usable declaration tree.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Unsupported input format or feature.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl MetabaseError {
    /// Create a JSON error.
    pub fn json(message: impl std::fmt::Display) -> Self {
        Self::Json(message.to_string())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl std::fmt::Display) -> Self {
        Self::Yaml(message.to_string())
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unsupported error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

impl From<serde_json::Error> for MetabaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err)
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for MetabaseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::yaml(err)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MetabaseError>;
