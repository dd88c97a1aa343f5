//! CLI errors: wraps core failures, adds the tool-configuration and
//! terminal cases, and maps everything onto exit codes.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use metacode_core::error::MetacodeError;

pub use metacode_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The tool configuration could not be loaded.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `metacode-core` or the adapters.
    #[error("{0}")]
    Core(#[from] MetacodeError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the tool configuration at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use the METACODE_<SECTION>__<KEY> form".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the terminal output is writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Usage | CoreCategory::Precondition => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error message, optional cause chain and suggestions, with colour.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, style: Style| -> String {
            if !color {
                return text;
            }
            match style {
                Style::Error => text.red().bold().to_string(),
                Style::Dim => text.dimmed().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
            }
        };

        let mut out = format!("\n{} {self}\n", paint("Error:".into(), Style::Error));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(format!("  Caused by: {err}"), Style::Dim));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("Suggestions:".into(), Style::Heading)));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Use -v / --verbose for more details.".into(), Style::Dim));
            out.push('\n');
        }
        out
    }

    /// Record the failure in the log before it is printed.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(error = %self, "command failed"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Dim,
    Heading,
}

/// Coarse classification driving the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing argument, malformed name or unmet precondition.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacode_core::application::ApplicationError;
    use metacode_core::domain::DomainError;
    use std::io;

    fn usage() -> CliError {
        CliError::Core(DomainError::MissingArgument { argument: "class name" }.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_usage_and_precondition() {
        assert_eq!(usage().exit_code(), 2);
        let precondition = CliError::Core(
            ApplicationError::PreconditionFailed {
                requirement: "module 'bar' does not exist".into(),
                path: "foo/bar.py".into(),
            }
            .into(),
        );
        assert_eq!(precondition.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::Core(
            ApplicationError::TemplateNotFound {
                name: "code/module.py".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::Core(MetacodeError::configuration("no .package_config.toml")).exit_code(),
            4
        );
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let s = usage().format_plain(false);
        assert!(s.contains("Error: Missing required argument"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("pymeta help add"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = usage().format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_colored_keeps_the_message() {
        let s = usage().format_colored(true);
        assert!(s.contains("Missing required argument"));
        assert!(s.contains("pymeta help add"));
    }

    #[test]
    fn core_suggestions_are_passed_through() {
        let err = CliError::Core(MetacodeError::configuration("missing"));
        assert!(err.suggestions().iter().any(|s| s.contains(".package_config.toml")));
    }
}
