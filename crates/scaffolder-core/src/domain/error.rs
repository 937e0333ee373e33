// ============================================================================
// domain/error.rs - DECLARATION DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through the application layer)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A `--field` value without the `name:type` separator.
    #[error("Field definition must be in 'name:type' form, got '{field}'")]
    MalformedField { field: String },

    #[error("Field '{name}' is already declared on {class}")]
    DuplicateField { name: String, class: String },

    #[error("Invalid element name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown inflection '{0}'")]
    UnknownInflection(String),

    #[error("Unknown accessibility '{0}'")]
    UnknownVisibility(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown declaration kind '{0}'")]
    UnknownKind(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedField { field } => vec![
                format!("'{}' has no ':' separator", field),
                "Declare fields as name:type, e.g. --field id:primary --field email:string".into(),
            ],
            Self::DuplicateField { name, .. } => vec![
                format!("Field '{}' was given more than once", name),
                "Remove the duplicate --field option".into(),
            ],
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used as a class name: {}", name, reason),
                "Use letters, digits and underscores; separate sub-namespaces with '/'".into(),
                "Examples: user, admin/user, blog_post".into(),
            ],
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not a known declaration kind", kind),
                "Known kinds: bootloader, config, controller, middleware, command, jobHandler, migration, filter, entity, repository, record".into(),
            ],
            Self::UnknownInflection(_) => {
                vec!["Supported inflections: tableize, camelize".into()]
            }
            Self::UnknownVisibility(_) => {
                vec!["Supported accessibility values: public, protected, private".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedField { .. }
            | Self::DuplicateField { .. }
            | Self::InvalidName { .. }
            | Self::InvalidDeclaration(_)
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UnknownInflection(_)
            | Self::UnknownVisibility(_) => ErrorCategory::Validation,
            Self::UnknownKind(_) => ErrorCategory::NotFound,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
