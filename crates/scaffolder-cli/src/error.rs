//! CLI error type, exit codes and the stderr report.
//!
//! Everything that can fail in a command ends up as a [`CliError`]. Core
//! errors keep their own category and suggestions; the CLI adds config,
//! settings-lookup and I/O failures on top.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use scaffolder_core::domain::DomainError;
use scaffolder_core::error::{ErrorCategory as CoreCategory, ScaffolderError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A config file could not be read, parsed or written, or it names an
    /// unknown declaration kind.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// `scaffolder settings get` with a key that does not exist.
    #[error("Unknown settings key '{key}'")]
    UnknownSettingsKey { key: String },

    #[error("{0}")]
    Core(#[from] ScaffolderError),

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

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

/// How an error is classified for exit codes and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad names, malformed fields, files that already exist.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check scaffolder.toml or the file passed with --config".into(),
                "Check SCAFFOLDER_* environment variables".into(),
                "Run 'scaffolder init' to write a config with every default".into(),
            ],
            Self::UnknownSettingsKey { key } => vec![
                format!("'{key}' is not a settings key"),
                "Use 'scaffolder settings show' to see every key".into(),
                "Examples: namespace, declarations.filter.postfix, mapping.email.validates".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check that the target directory is writable".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownSettingsKey { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 user error, 3 not found, 4 configuration, 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message printed to stderr.
    ///
    /// The source chain is only listed with `verbose`; without it a hint
    /// pointing at `-v` closes the report.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut out = String::new();
        out.push('\n');
        out.push_str(&paint("Error:", |t| t.red().bold().to_string()));
        out.push(' ');
        out.push_str(&self.to_string());
        out.push('\n');

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  Caused by: {err}");
                out.push_str(&paint(&line, |t| t.dimmed().to_string()));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", |t| t.yellow().bold().to_string()));
            out.push('\n');
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Use -v / --verbose for more details.", |t| {
                t.dimmed().to_string()
            }));
            out.push('\n');
        }

        out
    }

    /// Record the failure in the log at a level matching its category.
    pub fn trace(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// Attach a context message while converting a foreign error.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use scaffolder_core::application::ApplicationError;

    fn file_exists() -> CliError {
        CliError::Core(
            ApplicationError::FileExists {
                path: PathBuf::from("app/src/Filter/SignupFilter.php"),
            }
            .into(),
        )
    }

    fn config_error() -> CliError {
        CliError::ConfigError {
            message: "unknown declaration kind 'widget' in [declarations]".into(),
            source: None,
        }
    }

    #[test]
    fn file_exists_suggests_force() {
        assert!(file_exists().suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn unknown_key_points_to_show() {
        let err = CliError::UnknownSettingsKey { key: "nope".into() };
        assert!(err.suggestions().iter().any(|s| s.contains("settings show")));
    }

    #[test]
    fn malformed_field_is_user_error() {
        let err: CliError = DomainError::MalformedField {
            field: "email".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert!(err.to_string().contains("name:type"));
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(file_exists().exit_code(), 2);
        assert_eq!(CliError::UnknownSettingsKey { key: "x".into() }.exit_code(), 3);
        assert_eq!(config_error().exit_code(), 4);
        assert_eq!(
            CliError::Core(ScaffolderError::Domain(DomainError::UnknownKind("x".into()))).exit_code(),
            3
        );
        assert_eq!(CliError::from(io::Error::other("disk full")).exit_code(), 1);
    }

    #[test]
    fn plain_report_layout() {
        let report = file_exists().report(false, false);
        assert!(report.starts_with("\nError: "));
        assert!(report.contains("SignupFilter.php"));
        assert!(report.contains("\nSuggestions:\n  "));
        assert!(report.ends_with("Use -v / --verbose for more details.\n"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_lists_causes() {
        let err = CliError::IoError {
            message: "writing scaffolder.toml".into(),
            source: io::Error::other("read-only filesystem"),
        };
        let report = err.report(true, false);
        assert!(report.contains("  Caused by: read-only filesystem\n"));
        assert!(!report.contains("--verbose"));
    }

    #[test]
    fn coloured_report_keeps_text() {
        let report = config_error().report(false, true);
        assert!(report.contains('\u{1b}'));
        assert!(report.contains("widget"));
    }

    #[test]
    fn io_context_attached() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_cli_context(|| "reading config").unwrap_err();
        assert!(matches!(err, CliError::IoError { ref message, .. } if message == "reading config"));
    }
}
