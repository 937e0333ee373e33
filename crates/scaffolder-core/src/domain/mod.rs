//! Core domain layer for the scaffolder.
//!
//! Pure logic: declarations, field parsing, naming, defaults and settings.
//! Rendering and I/O go through the ports in the application layer.
//!
//! - **No I/O**: no filesystem, clock or environment access
//! - **Few crates**: std, `thiserror`, `heck` and `serde` derives
//! - **Rich domain model**: behavior lives in declarations and builders

// Public API
pub mod declarations;
pub mod entities;
pub mod error;
pub mod field;
pub mod naming;
pub mod registry;
pub mod settings;
pub mod value_objects;

mod validation;

pub use declarations::{
    BootloaderDeclaration, CommandDeclaration, ConfigDeclaration, ControllerDeclaration, Declare,
    EntityDeclaration, FilterDeclaration, JobHandlerDeclaration, MiddlewareDeclaration,
    MigrationDeclaration, RecordDeclaration, RepositoryDeclaration,
};
pub use entities::{
    common::RelativePath,
    declaration::Declaration,
    file_plan::{FilePlan, FileRole, PlannedFile},
    php::{Constant, Import, Method, Parameter, PhpValue, Property, annotation_string, php_string},
};
pub use error::{DomainError, ErrorCategory};
pub use field::{FieldMapping, FieldSpec, TypeMapping};
pub use naming::ClassLocation;
pub use settings::{KindSettings, ScaffolderSettings};
pub use validation::DomainValidator;
pub use value_objects::{DeclarationKind, FieldSource, Inflection, Visibility};
