//! Per-kind declaration builders.
//!
//! Every builder wraps a [`Declaration`] prepared by `DeclarationFactory`
//! (namespace, class name, header, comment) and adds the members its kind
//! needs. [`Declare::finish`] materializes those members, normalizes the
//! declaration and validates it.

mod bootloader;
mod command;
mod config;
mod controller;
mod entity;
mod filter;
mod job_handler;
mod middleware;
mod migration;
mod record;
mod repository;

pub use bootloader::BootloaderDeclaration;
pub use command::CommandDeclaration;
pub use config::ConfigDeclaration;
pub use controller::ControllerDeclaration;
pub use entity::EntityDeclaration;
pub use filter::FilterDeclaration;
pub use job_handler::JobHandlerDeclaration;
pub use middleware::MiddlewareDeclaration;
pub use migration::MigrationDeclaration;
pub use record::RecordDeclaration;
pub use repository::RepositoryDeclaration;

use crate::domain::{
    entities::Declaration, error::DomainError, validation::DomainValidator,
    value_objects::DeclarationKind,
};

pub trait Declare {
    fn declaration(&self) -> &Declaration;

    fn declaration_mut(&mut self) -> &mut Declaration;

    /// Write the kind-specific members into the declaration.
    fn build(self) -> Result<Declaration, DomainError>;

    fn kind(&self) -> DeclarationKind {
        self.declaration().kind()
    }

    /// Build, normalize and validate.
    fn finish(self) -> Result<Declaration, DomainError>
    where
        Self: Sized,
    {
        let mut declaration = self.build()?;
        declaration.normalize();
        DomainValidator::validate_declaration(&declaration)?;
        Ok(declaration)
    }
}

/// Implements the accessor half of [`Declare`] for a builder whose
/// declaration lives in a `declaration` field.
macro_rules! declaration_access {
    () => {
        fn declaration(&self) -> &$crate::domain::entities::Declaration {
            &self.declaration
        }

        fn declaration_mut(&mut self) -> &mut $crate::domain::entities::Declaration {
            &mut self.declaration
        }
    };
}

pub(crate) use declaration_access;

/// Column type for a field, `string` when none was given.
pub(crate) fn column_type(kind: &str) -> &str {
    if kind.is_empty() { "string" } else { kind }
}

/// Trimmed value, `None` when blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
