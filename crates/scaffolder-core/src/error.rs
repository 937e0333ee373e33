//! Crate-level error type.
//!
//! Domain and application errors meet here so callers handle one type. Each
//! variant keeps the category and suggestions of the layer it came from.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum ScaffolderError {
    /// Invalid names, fields or declarations.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Rendering and filesystem failures, existing targets.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ScaffolderError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification used for exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

pub type ScaffolderResult<T> = Result<T, ScaffolderError>;
