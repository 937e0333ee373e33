//! Domain and application layers of the PHP class scaffolder.
//!
//! Builders in [`domain::declarations`] shape a [`domain::Declaration`];
//! [`application::ScaffoldService`] renders it through the
//! [`application::ports`] and writes the resulting files.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         scaffolder-cli (CLI)            │
//! │   create:* commands, config, output     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (DeclarationFactory, ScaffoldService)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, SourceRenderer, Clock)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   scaffolder-adapters (Infrastructure)  │
//! │ (LocalFilesystem, PhpRenderer, clocks)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (Declaration, builders, naming, fields) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scaffolder_core::prelude::*;
//!
//! let factory = DeclarationFactory::new(ScaffolderSettings::default());
//! let draft = factory.draft(DeclarationKind::Filter, "signup", None).unwrap();
//!
//! let mut filter = FilterDeclaration::new(draft.declaration, factory.mapping());
//! filter.declare_field(FieldSpec::parse("email:email").unwrap()).unwrap();
//! let declaration = filter.finish().unwrap();
//!
//! // With injected adapters:
//! // service.write(&declaration, &draft.location, false).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything needed to draft, build and write a declaration.
pub mod prelude {
    pub use crate::application::{
        DeclarationFactory, Draft, ScaffoldService, WrittenFile,
        ports::{Clock, Filesystem, SourceRenderer},
    };
    pub use crate::domain::{
        BootloaderDeclaration, ClassLocation, CommandDeclaration, ConfigDeclaration,
        ControllerDeclaration, Declaration, DeclarationKind, Declare, EntityDeclaration,
        FieldSpec, FilterDeclaration, Inflection, JobHandlerDeclaration, MiddlewareDeclaration,
        MigrationDeclaration, RecordDeclaration, RepositoryDeclaration, ScaffolderSettings,
        TypeMapping, Visibility,
    };
    pub use crate::error::{ScaffolderError, ScaffolderResult};
}
