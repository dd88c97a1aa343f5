// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("Missing required argument: {argument}")]
    MissingArgument { argument: &'static str },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unknown license '{license}'")]
    UnknownLicense { license: String },

    // ========================================================================
    // Document Structure Errors
    // ========================================================================
    #[error("Marker '{marker}' not found")]
    MarkerNotFound { marker: String },

    #[error("Anchor '{anchor}' not found")]
    AnchorNotFound { anchor: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { argument } => vec![
                format!("Provide the {} on the command line", argument),
                "Try: pymeta help add".into(),
            ],
            Self::InvalidName { reason, .. } => vec![
                format!("Details: {}", reason),
                "Use dotted names like 'subpackage.module' for nested modules".into(),
            ],
            Self::UnknownLicense { .. } => vec![
                format!("Supported licenses: {}", super::License::ALL_NAMES.join(", ")),
                "Set package.license in the configuration file".into(),
            ],
            Self::MarkerNotFound { marker } => vec![
                format!("The document has no '{}' block", marker),
                "Restore the block by hand or regenerate the file".into(),
            ],
            Self::AnchorNotFound { anchor } => vec![
                format!("The document has no line containing '{}'", anchor),
                "The file may have been edited by hand".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } | Self::InvalidName { .. } => ErrorCategory::Usage,
            Self::UnknownLicense { .. } => ErrorCategory::Configuration,
            Self::MarkerNotFound { .. } | Self::AnchorNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
