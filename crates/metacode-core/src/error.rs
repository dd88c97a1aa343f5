//! Unified error handling for Metacode Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Metacode Core operations.
#[derive(Debug, Error, Clone)]
pub enum MetacodeError {
    /// Errors from the domain layer (invalid names, malformed documents).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, templates, preconditions).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl MetacodeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run pymeta from the package root, next to .package_config.toml".into(),
                "Or write a fresh file with: pymeta write config".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in metacode".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for a configuration failure.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required argument was missing or malformed.
    Usage,
    /// Something the command relies on does not exist yet.
    Precondition,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type MetacodeResult<T> = Result<T, MetacodeError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> MetacodeResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> MetacodeResult<T> {
        self.map_err(|e| MetacodeError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
