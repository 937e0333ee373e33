//! Declaration factory - turns a kind and an element name into a draft.
//!
//! The draft carries everything every kind shares: namespace, class name,
//! parent class, header and class comment. Kind builders take it from
//! there.

use tracing::{debug, instrument};

use crate::{
    domain::{
        ClassLocation, Declaration, DeclarationKind, ScaffolderSettings, TypeMapping, naming,
        registry,
    },
    error::ScaffolderResult,
};

/// A located, not yet specialized declaration.
#[derive(Debug, Clone)]
pub struct Draft {
    pub location: ClassLocation,
    pub declaration: Declaration,
}

pub struct DeclarationFactory {
    settings: ScaffolderSettings,
}

impl DeclarationFactory {
    pub fn new(settings: ScaffolderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScaffolderSettings {
        &self.settings
    }

    /// Type table for filters and records.
    pub fn mapping(&self) -> TypeMapping {
        self.settings.mapping.clone()
    }

    /// Resolve where a class of `kind` named `element` lives.
    pub fn locate(&self, kind: DeclarationKind, element: &str) -> ScaffolderResult<ClassLocation> {
        let kind_settings = self.settings.kind(kind);
        let location = naming::resolve_location(
            element,
            &self.settings.namespace,
            &kind_settings.namespace,
            &kind_settings.postfix,
        )?;
        Ok(location)
    }

    #[instrument(skip(self, comment), fields(kind = %kind))]
    pub fn draft(
        &self,
        kind: DeclarationKind,
        element: &str,
        comment: Option<&str>,
    ) -> ScaffolderResult<Draft> {
        let location = self.locate(kind, element)?;
        debug!(class = %location.fqcn(), path = %location.path, "Element resolved");

        let mut declaration = Declaration::at(kind, &location);
        if let Some(parent) = registry::kind_def(kind).parent {
            declaration.set_parent(parent);
        }
        declaration.set_header(self.settings.rendered_header());
        if let Some(comment) = comment {
            declaration.set_comment(comment);
        }

        Ok(Draft {
            location,
            declaration,
        })
    }
}
