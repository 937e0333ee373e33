//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "draft a controller" or "write a declaration".

pub mod declaration_factory;
pub mod scaffold_service;

pub use declaration_factory::{DeclarationFactory, Draft};
pub use scaffold_service::{ScaffoldService, WrittenFile};
