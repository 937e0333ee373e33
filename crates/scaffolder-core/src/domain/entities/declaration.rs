//! The `Declaration` aggregate: an in-memory model of one class to generate.
//!
//! ## Lifecycle
//!
//! 1. Created by `DeclarationFactory` with namespace, class name and header
//! 2. Mutated by a kind builder (`declare_field`, constants, methods, ...)
//! 3. Normalized once (`normalize`)
//! 4. Rendered by a `SourceRenderer` and discarded

use crate::domain::{
    entities::php::{Constant, Import, Method, Property},
    error::DomainError,
    field::FieldSpec,
    naming::{self, ClassLocation, NAMESPACE_SEPARATOR},
    value_objects::DeclarationKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    kind: DeclarationKind,
    namespace: String,
    name: String,
    parent: Option<String>,
    interfaces: Vec<String>,
    traits: Vec<String>,
    imports: Vec<Import>,
    header: Vec<String>,
    comment: Vec<String>,
    fields: Vec<FieldSpec>,
    constants: Vec<Constant>,
    properties: Vec<Property>,
    methods: Vec<Method>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            traits: Vec::new(),
            imports: Vec::new(),
            header: Vec::new(),
            comment: Vec::new(),
            fields: Vec::new(),
            constants: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn at(kind: DeclarationKind, location: &ClassLocation) -> Self {
        Self::new(kind, location.namespace.clone(), location.class.clone())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fqcn(&self) -> String {
        naming::join_namespace([self.namespace.as_str(), self.name.as_str()])
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn comment(&self) -> &[String] {
        &self.comment
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.name == name)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name() == name)
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    pub fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = Some(parent.into());
    }

    pub fn add_interface(&mut self, interface: impl Into<String>) {
        let interface = interface.into();
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
    }

    pub fn add_trait(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.traits.contains(&name) {
            self.traits.push(name);
        }
    }

    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn set_header(&mut self, lines: Vec<String>) {
        self.header = lines;
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.lines().map(|l| l.trim_end().to_string()).collect();
    }

    pub fn add_comment_line(&mut self, line: impl Into<String>) {
        self.comment.push(line.into());
    }

    /// Declare a field; names are unique within one declaration.
    pub fn declare_field(&mut self, field: FieldSpec) -> Result<(), DomainError> {
        if !is_identifier(field.name()) {
            return Err(DomainError::InvalidName {
                name: field.name().to_string(),
                reason: "field names must be valid PHP identifiers".into(),
            });
        }
        if self.has_field(field.name()) {
            return Err(DomainError::DuplicateField {
                name: field.name().to_string(),
                class: self.name.clone(),
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Add or replace a constant by name.
    pub fn set_constant(&mut self, constant: Constant) {
        match self.constants.iter_mut().find(|c| c.name == constant.name) {
            Some(existing) => *existing = constant,
            None => self.constants.push(constant),
        }
    }

    /// Add or replace a property by name.
    pub fn set_property(&mut self, property: Property) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Add or replace a method by name.
    pub fn set_method(&mut self, method: Method) {
        match self.methods.iter_mut().find(|m| m.name == method.name) {
            Some(existing) => *existing = method,
            None => self.methods.push(method),
        }
    }

    // ── Normalization ─────────────────────────────────────────────────────

    /// Import every qualified type the class references, deduplicate and
    /// sort imports, drop imports from the class's own namespace, and trim
    /// trailing blank header and comment lines.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) {
        let referenced: Vec<String> = self
            .parent
            .iter()
            .chain(self.interfaces.iter())
            .chain(self.traits.iter())
            .filter(|name| name.contains(NAMESPACE_SEPARATOR))
            .cloned()
            .collect();
        self.imports.extend(referenced.iter().map(Import::new));

        let own_namespace = self.namespace.clone();
        self.imports.retain(|import| {
            !import.name.is_empty()
                && !(import.alias.is_none() && naming::namespace_of(&import.name) == own_namespace)
        });

        self.imports.sort_by(|a, b| {
            a.name
                .to_ascii_lowercase()
                .cmp(&b.name.to_ascii_lowercase())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.alias.cmp(&b.alias))
        });
        self.imports.dedup();

        // Two imports may not share a local name; the later one is referenced
        // by its fully qualified name instead.
        let mut local_names: Vec<String> = vec![self.name.clone()];
        self.imports.retain(|import| {
            let local = import.local_name().to_string();
            if local_names.contains(&local) {
                false
            } else {
                local_names.push(local);
                true
            }
        });

        trim_trailing_blank(&mut self.header);
        trim_trailing_blank(&mut self.comment);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// How a type is written inside this file.
    ///
    /// Imported and same-namespace types use their short name; other
    /// qualified types are written fully qualified.
    pub fn type_reference(&self, name: &str) -> String {
        let fqcn = name.trim_start_matches(NAMESPACE_SEPARATOR);
        if !fqcn.contains(NAMESPACE_SEPARATOR) {
            return fqcn.to_string();
        }
        if let Some(import) = self.imports.iter().find(|i| i.name == fqcn) {
            return import.local_name().to_string();
        }
        if naming::namespace_of(fqcn) == self.namespace {
            return naming::short_name(fqcn).to_string();
        }
        format!("\\{fqcn}")
    }
}

fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
