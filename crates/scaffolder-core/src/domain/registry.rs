//! Declaration defaults registry.
//!
//! Each declaration kind is described exactly once by its [`KindDef`]. The
//! settings layer starts from these entries and lets configuration files
//! override them; nothing else hardcodes a namespace or postfix.
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to `DeclarationKind` in `value_objects.rs`
//! 2. Add one [`KindDef`] entry to [`KIND_REGISTRY`]
//! 3. Add a builder under `declarations/`

use crate::domain::{
    field::{FieldMapping, TypeMapping},
    value_objects::DeclarationKind,
};

/// Comment lines applied to every scaffolded file.
pub const DEFAULT_HEADER: &[&str] = &["{project-name}", "", "@author {author-name}"];

/// Base directory for generated classes.
pub const DEFAULT_DIRECTORY: &str = "app/src/";

/// Root namespace for generated classes.
pub const DEFAULT_NAMESPACE: &str = "App";

/// Describes where and how one declaration kind is generated.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub kind: DeclarationKind,

    /// Sub-namespace under the root namespace. Empty means none.
    pub namespace: &'static str,

    /// Appended to the class name unless already present. Empty means none.
    pub postfix: &'static str,

    /// Fully qualified parent class, if the kind extends one.
    pub parent: Option<&'static str>,

    /// Companion directory (config files, migrations).
    pub directory: Option<&'static str>,

    pub description: &'static str,
}

/// Single source of truth for declaration defaults.
pub static KIND_REGISTRY: &[KindDef] = &[
    KindDef {
        kind: DeclarationKind::Bootloader,
        namespace: "Bootloader",
        postfix: "Bootloader",
        parent: Some("Spiral\\Boot\\Bootloader\\Bootloader"),
        directory: None,
        description: "Create bootloader declaration",
    },
    KindDef {
        kind: DeclarationKind::Config,
        namespace: "Config",
        postfix: "Config",
        parent: Some("Spiral\\Core\\InjectableConfig"),
        directory: Some("app/config/"),
        description: "Create config declaration",
    },
    KindDef {
        kind: DeclarationKind::Controller,
        namespace: "Controller",
        postfix: "Controller",
        parent: None,
        directory: None,
        description: "Create controller declaration",
    },
    KindDef {
        kind: DeclarationKind::Middleware,
        namespace: "Middleware",
        postfix: "",
        parent: None,
        directory: None,
        description: "Create middleware declaration",
    },
    KindDef {
        kind: DeclarationKind::Command,
        namespace: "Command",
        postfix: "Command",
        parent: Some("Spiral\\Console\\Command"),
        directory: None,
        description: "Create command declaration",
    },
    KindDef {
        kind: DeclarationKind::JobHandler,
        namespace: "Job",
        postfix: "Job",
        parent: Some("Spiral\\Jobs\\JobHandler"),
        directory: None,
        description: "Create job handler declaration",
    },
    KindDef {
        kind: DeclarationKind::Migration,
        namespace: "",
        postfix: "Migration",
        parent: Some("Spiral\\Migrations\\Migration"),
        directory: Some("app/migrations/"),
        description: "Create migration declaration",
    },
    KindDef {
        kind: DeclarationKind::Filter,
        namespace: "Filter",
        postfix: "Filter",
        parent: Some("Spiral\\Filters\\Filter"),
        directory: None,
        description: "Create filter declaration",
    },
    KindDef {
        kind: DeclarationKind::Entity,
        namespace: "Database",
        postfix: "",
        parent: None,
        directory: None,
        description: "Create annotated entity declaration",
    },
    KindDef {
        kind: DeclarationKind::Repository,
        namespace: "Repository",
        postfix: "Repository",
        parent: Some("Cycle\\ORM\\Select\\Repository"),
        directory: None,
        description: "Create repository declaration",
    },
    KindDef {
        kind: DeclarationKind::Record,
        namespace: "Database",
        postfix: "",
        parent: Some("Spiral\\ORM\\Record"),
        directory: None,
        description: "Create new Record model",
    },
];

/// Registry entry for a kind.
///
/// Every `DeclarationKind` has exactly one entry; the registry test below
/// keeps that true.
pub fn kind_def(kind: DeclarationKind) -> &'static KindDef {
    KIND_REGISTRY
        .iter()
        .find(|def| def.kind == kind)
        .unwrap_or(&KIND_REGISTRY[0])
}

/// Default filter mapping for common field types.
pub fn default_type_mapping() -> TypeMapping {
    TypeMapping::new(FieldMapping::data("strval", &["notEmpty", "string"]))
        .with("int", FieldMapping::data("intval", &["notEmpty", "integer"]))
        .with("integer", FieldMapping::data("intval", &["notEmpty", "integer"]))
        .with("float", FieldMapping::data("floatval", &["notEmpty", "float"]))
        .with("double", FieldMapping::data("floatval", &["notEmpty", "float"]))
        .with("string", FieldMapping::data("strval", &["notEmpty", "string"]))
        .with("bool", FieldMapping::data("boolval", &["notEmpty", "boolean"]))
        .with("boolean", FieldMapping::data("boolval", &["notEmpty", "boolean"]))
        .with(
            "email",
            FieldMapping::data("strval", &["notEmpty", "string", "email"]),
        )
        .with("file", FieldMapping::file(&["file::uploaded"]))
        .with(
            "image",
            FieldMapping::file(&["image::uploaded", "image::valid"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_registered_once() {
        for kind in DeclarationKind::ALL {
            let count = KIND_REGISTRY.iter().filter(|d| d.kind == kind).count();
            assert_eq!(count, 1, "{kind} registered {count} times");
        }
    }

    #[test]
    fn empty_string_sentinels() {
        assert_eq!(kind_def(DeclarationKind::Middleware).postfix, "");
        assert_eq!(kind_def(DeclarationKind::Migration).namespace, "");
        assert_eq!(kind_def(DeclarationKind::Entity).postfix, "");
    }

    #[test]
    fn companion_directories() {
        assert_eq!(
            kind_def(DeclarationKind::Config).directory,
            Some("app/config/")
        );
        assert_eq!(
            kind_def(DeclarationKind::Migration).directory,
            Some("app/migrations/")
        );
        assert!(kind_def(DeclarationKind::Controller).directory.is_none());
    }

    #[test]
    fn mapping_covers_documented_types() {
        let mapping = default_type_mapping();
        for ty in [
            "int", "integer", "float", "double", "string", "bool", "boolean", "email", "file",
            "image",
        ] {
            assert!(mapping.contains(ty), "missing {ty}");
        }
    }
}
