//! Typed scaffolder settings.
//!
//! [`ScaffolderSettings::default`] is built from the registry. The CLI merges
//! user configuration on top and hands the result to the application layer;
//! after that the settings are never mutated.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{
    field::TypeMapping,
    registry::{self, DEFAULT_DIRECTORY, DEFAULT_HEADER, DEFAULT_NAMESPACE},
    value_objects::DeclarationKind,
};

/// Placeholder substituted with the configured project name.
pub const PROJECT_NAME: &str = "project-name";
/// Placeholder substituted with the configured author name.
pub const AUTHOR_NAME: &str = "author-name";

/// Per-kind settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSettings {
    pub namespace: String,
    pub postfix: String,
    /// Companion directory (config files, migrations).
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffolderSettings {
    /// Header comment lines, may contain `{placeholder}` tokens.
    pub header: Vec<String>,
    /// Base directory for generated classes.
    pub directory: PathBuf,
    /// Root namespace.
    pub namespace: String,
    /// Values for header placeholders, keyed without braces.
    pub placeholders: BTreeMap<String, String>,
    pub declarations: BTreeMap<DeclarationKind, KindSettings>,
    /// Filter type table.
    pub mapping: TypeMapping,
}

impl Default for ScaffolderSettings {
    fn default() -> Self {
        let declarations = registry::KIND_REGISTRY
            .iter()
            .map(|def| {
                (
                    def.kind,
                    KindSettings {
                        namespace: def.namespace.to_string(),
                        postfix: def.postfix.to_string(),
                        directory: def.directory.map(PathBuf::from),
                    },
                )
            })
            .collect();

        Self {
            header: DEFAULT_HEADER.iter().map(|l| l.to_string()).collect(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            namespace: DEFAULT_NAMESPACE.to_string(),
            placeholders: BTreeMap::new(),
            declarations,
            mapping: registry::default_type_mapping(),
        }
    }
}

impl ScaffolderSettings {
    /// Settings for a kind, falling back to the registry defaults.
    pub fn kind(&self, kind: DeclarationKind) -> KindSettings {
        self.declarations.get(&kind).cloned().unwrap_or_else(|| {
            let def = registry::kind_def(kind);
            KindSettings {
                namespace: def.namespace.to_string(),
                postfix: def.postfix.to_string(),
                directory: def.directory.map(PathBuf::from),
            }
        })
    }

    /// Companion directory for a kind, if it has one.
    pub fn companion_directory(&self, kind: DeclarationKind) -> Option<PathBuf> {
        self.kind(kind).directory
    }

    /// Absolute-or-relative path of a class file under the source directory.
    pub fn class_path(&self, relative: &Path) -> PathBuf {
        self.directory.join(relative)
    }

    pub fn set_placeholder(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.placeholders.insert(key.into(), value.into());
    }

    /// Header with configured placeholders substituted.
    ///
    /// Unknown placeholders are left untouched so the user can spot them.
    pub fn rendered_header(&self) -> Vec<String> {
        self.header
            .iter()
            .map(|line| substitute(line, &self.placeholders))
            .collect()
    }
}

/// Replace every `{key}` token whose key is present in `values`.
pub fn substitute(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in values {
        result = result.replace(&format!("{{{key}}}"), value);
    }
    result
}
