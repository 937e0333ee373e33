//! Field declarations (`--field name:type`) and the type → filter mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::FieldSource};

/// A parsed `name:type` field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: String,
    kind: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Parse a raw CLI value.
    ///
    /// Only the first two `:`-separated segments are significant, so
    /// `price:float:extra` declares `price` of type `float`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !raw.contains(':') {
            return Err(DomainError::MalformedField {
                field: raw.to_string(),
            });
        }

        let mut parts = raw.split(':');
        let name = parts.next().unwrap_or_default().trim();
        let kind = parts.next().unwrap_or_default().trim();

        if name.is_empty() {
            return Err(DomainError::MalformedField {
                field: raw.to_string(),
            });
        }

        Ok(Self::new(name, kind))
    }

    /// Parse every value, stopping at the first malformed one.
    pub fn parse_all<I, S>(raw: I) -> Result<Vec<Self>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().map(|r| Self::parse(r.as_ref())).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, possibly empty (`name:`).
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.kind)
    }
}

impl FromStr for FieldSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Type mapping ─────────────────────────────────────────────────────────────

/// How a filter reads, casts and validates one field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default)]
    pub source: FieldSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<String>,
    #[serde(default)]
    pub validates: Vec<String>,
}

impl FieldMapping {
    pub fn data(setter: &str, validates: &[&str]) -> Self {
        Self {
            source: FieldSource::Data,
            setter: Some(setter.to_string()),
            validates: validates.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn file(validates: &[&str]) -> Self {
        Self {
            source: FieldSource::File,
            setter: None,
            validates: validates.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Schema origin string, e.g. `data:email`.
    pub fn origin(&self, field: &str) -> String {
        format!("{}:{}", self.source, field)
    }
}

/// Type name → [`FieldMapping`] table with a fallback for unknown types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    types: BTreeMap<String, FieldMapping>,
    fallback: FieldMapping,
}

impl TypeMapping {
    pub fn new(fallback: FieldMapping) -> Self {
        Self {
            types: BTreeMap::new(),
            fallback,
        }
    }

    /// Register or replace the mapping for a type (case-insensitive).
    pub fn insert(&mut self, kind: impl AsRef<str>, mapping: FieldMapping) {
        self.types
            .insert(kind.as_ref().to_ascii_lowercase(), mapping);
    }

    pub fn with(mut self, kind: &str, mapping: FieldMapping) -> Self {
        self.insert(kind, mapping);
        self
    }

    pub fn set_fallback(&mut self, mapping: FieldMapping) {
        self.fallback = mapping;
    }

    /// Look up a type; unknown and empty types use the fallback entry.
    pub fn resolve(&self, kind: &str) -> &FieldMapping {
        self.types
            .get(&kind.to_ascii_lowercase())
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.types.contains_key(&kind.to_ascii_lowercase())
    }

    pub fn fallback(&self) -> &FieldMapping {
        &self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMapping)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        crate::domain::registry::default_type_mapping()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_and_type() {
        let field = FieldSpec::parse("email:string").unwrap();
        assert_eq!(field.name(), "email");
        assert_eq!(field.kind(), "string");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            FieldSpec::parse("email"),
            Err(DomainError::MalformedField {
                field: "email".into()
            })
        );
    }

    #[test]
    fn parse_rejects_empty_name() {
        assert!(matches!(
            FieldSpec::parse(":int"),
            Err(DomainError::MalformedField { .. })
        ));
    }

    #[test]
    fn parse_ignores_extra_segments() {
        let field = FieldSpec::parse("price:float:unsigned").unwrap();
        assert_eq!(field.name(), "price");
        assert_eq!(field.kind(), "float");
    }

    #[test]
    fn parse_allows_empty_type() {
        let field = FieldSpec::parse("title:").unwrap();
        assert_eq!(field.kind(), "");
    }

    #[test]
    fn parse_all_stops_on_first_error() {
        let result = FieldSpec::parse_all(["id:int", "broken", "name:string"]);
        assert_eq!(
            result,
            Err(DomainError::MalformedField {
                field: "broken".into()
            })
        );
    }

    #[test]
    fn default_mapping_matches_type_table() {
        let mapping = TypeMapping::default();

        let int = mapping.resolve("int");
        assert_eq!(int.setter.as_deref(), Some("intval"));
        assert_eq!(int.validates, vec!["notEmpty", "integer"]);

        let email = mapping.resolve("email");
        assert_eq!(email.setter.as_deref(), Some("strval"));
        assert_eq!(email.validates, vec!["notEmpty", "string", "email"]);

        let image = mapping.resolve("image");
        assert_eq!(image.source, FieldSource::File);
        assert!(image.setter.is_none());
        assert_eq!(image.validates, vec!["image::uploaded", "image::valid"]);
    }

    #[test]
    fn unknown_type_falls_back_to_string() {
        let mapping = TypeMapping::default();
        let unknown = mapping.resolve("uuid");
        assert_eq!(unknown.setter.as_deref(), Some("strval"));
        assert_eq!(unknown.validates, vec!["notEmpty", "string"]);
        assert_eq!(mapping.resolve(""), unknown);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mapping = TypeMapping::default();
        assert_eq!(mapping.resolve("INT"), mapping.resolve("int"));
    }

    #[test]
    fn origin_prefixes_source() {
        assert_eq!(FieldMapping::file(&[]).origin("avatar"), "file:avatar");
        assert_eq!(
            FieldMapping::data("strval", &[]).origin("name"),
            "data:name"
        );
    }
}
