//! Error types for the practice log.

use thiserror::Error;

/// Reasons a draft is rejected by `SessionStore::add_session`.
///
/// A rejection never mutates the store; the caller keeps the draft so the
/// user can correct it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Activity is empty or whitespace only
    #[error("activity is required")]
    MissingActivity,

    /// Duration field is empty
    #[error("duration is required")]
    MissingDuration,

    /// Duration is not a finite number
    #[error("duration '{raw}' is not a number")]
    InvalidDuration { raw: String },

    /// Duration parsed but is below zero
    #[error("duration '{raw}' must not be negative")]
    NegativeDuration { raw: String },
}

/// A shared error type for the practice log crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PracticeError {
    /// Draft failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Report template failed to render
    #[error("Render error: {message}")]
    Render { message: String },

    /// Configuration could not be parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PracticeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for PracticeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for PracticeError {
    fn from(err: minijinja::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PracticeError>`.
pub type Result<T> = std::result::Result<T, PracticeError>;
