//! Error types for the Vidcat library.
//!
//! Every fallible library operation returns [`VidcatError`]. The HTTP layer
//! maps each variant onto a status code through [`VidcatError::status_code`],
//! so the variants double as the request-level error taxonomy.

use crate::gateway::GatewayError;
use thiserror::Error;

/// Main error type for the Vidcat library.
#[derive(Debug, Error)]
pub enum VidcatError {
    // Input errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Category store errors
    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    #[error("Category already exists: {id}")]
    DuplicateCategory { id: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Upstream errors
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for Vidcat operations.
pub type Result<T> = std::result::Result<T, VidcatError>;

impl VidcatError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        VidcatError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status code this error surfaces as.
    ///
    /// - 400: invalid input or duplicate category
    /// - 404: unknown category
    /// - 500: missing credentials, upstream failure, anything else
    pub fn status_code(&self) -> u16 {
        match self {
            VidcatError::Validation { .. } | VidcatError::DuplicateCategory { .. } => 400,
            VidcatError::CategoryNotFound { .. } => 404,
            VidcatError::Config { .. }
            | VidcatError::Gateway(_)
            | VidcatError::Other(_) => 500,
        }
    }

    /// Client-facing message, matching the wording the web UI expects.
    pub fn public_message(&self) -> String {
        match self {
            VidcatError::Validation { message, .. } => message.clone(),
            VidcatError::CategoryNotFound { .. } => "Category not found".to_string(),
            VidcatError::DuplicateCategory { .. } => {
                "Category with this title already exists".to_string()
            }
            VidcatError::Config { message } => message.clone(),
            VidcatError::Gateway(_) => {
                "Failed to fetch videos from YouTube API".to_string()
            }
            VidcatError::Other(message) => message.clone(),
        }
    }

    /// Optional detail lines attached to the error body.
    pub fn details(&self) -> Option<Vec<String>> {
        match self {
            VidcatError::Gateway(e) => Some(vec![e.to_string()]),
            _ => None,
        }
    }
}
