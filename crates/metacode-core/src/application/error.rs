//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No search location provides the named template.
    #[error("Template '{name}' not found in any template location")]
    TemplateNotFound { name: String },

    /// Template rendering failed.
    #[error("Rendering template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Something the command relies on does not exist.
    #[error("Precondition failed: {requirement} ({path})")]
    PreconditionFailed { requirement: String, path: PathBuf },

    /// Adapter state lock was poisoned.
    #[error("Adapter state is unavailable (lock poisoned)")]
    StoreLockError,

    /// The version-control tool failed.
    #[error("Version control failed: {reason}")]
    VersionControlFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("Looked for: {}", name),
                "Check METACODE_TEMPLATES_DIR and your user template directory".into(),
                "A missing bundled template indicates a broken installation".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PreconditionFailed { requirement, .. } => vec![
                format!("Create it first: {}", requirement),
                "Commands must run from the package root directory".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the template '{}' for syntax errors", template),
                "User template overrides take precedence over bundled ones".into(),
            ],
            Self::VersionControlFailed { .. } => vec!["Ensure git is installed and in your PATH".into()],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::PreconditionFailed { .. } => ErrorCategory::Precondition,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::VersionControlFailed { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for a precondition failure about `path`.
    pub fn precondition(requirement: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::PreconditionFailed {
            requirement: requirement.into(),
            path: path.into(),
        }
    }
}
