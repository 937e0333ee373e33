//! Failures while turning a finished declaration into files.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The target file is already there and `--force` was not given.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },
}

impl ApplicationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run the command from the application root".into(),
            ],
            Self::FileExists { path } => vec![
                format!("{} would be overwritten", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Use --dry-run to print the generated source instead".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "The declaration could not be turned into source".into(),
                "Run with -vv for details".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FileExists { .. } => ErrorCategory::Validation,
        }
    }
}
