//! Class members of a generated PHP class.
//!
//! Plain data; formatting is the renderer's job. The literal helpers at the
//! bottom are shared by the renderer and by builders that emit method bodies
//! or annotations directly.

use crate::domain::{naming, value_objects::Visibility};

/// A PHP literal used for constant and property defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhpValue {
    /// Single-quoted string literal.
    Str(String),
    /// Emitted verbatim, e.g. `UserRepository::class`.
    Raw(String),
    /// `[a, b, c]`
    List(Vec<PhpValue>),
    /// `['key' => value]`, insertion-ordered.
    Map(Vec<(String, PhpValue)>),
}

impl PhpValue {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// An empty array literal.
    pub fn empty_array() -> Self {
        Self::List(Vec::new())
    }

    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|v| Self::Str(v.into())).collect())
    }

    pub fn is_empty_array(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// A `use` statement at file level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    /// Fully qualified name without leading separator.
    pub name: String,
    pub alias: Option<String>,
}

impl Import {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name
                .as_ref()
                .trim_start_matches(naming::NAMESPACE_SEPARATOR)
                .to_string(),
            alias: None,
        }
    }

    pub fn aliased(name: impl AsRef<str>, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::new(name)
        }
    }

    /// Name the import is referred to by inside the file.
    pub fn local_name(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| naming::short_name(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub visibility: Visibility,
    pub value: PhpValue,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: PhpValue) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Protected,
            value,
        }
    }

    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub visibility: Visibility,
    pub default: Option<PhpValue>,
    /// Docblock lines, without `*` decoration.
    pub comment: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            default: None,
            comment: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: PhpValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comment.push(line.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_hint: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
        }
    }

    pub fn typed(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    /// Body lines, unindented.
    pub body: Vec<String>,
    pub comment: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: None,
            body: Vec::new(),
            comment: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn with_comment(mut self, line: impl Into<String>) -> Self {
        self.comment.push(line.into());
        self
    }
}

/// Single-quoted PHP string literal: `o'brien` → `'o\'brien'`.
pub fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Double-quoted annotation value. Annotation strings escape `"` by doubling
/// it and take backslashes literally, so class names pass through unchanged.
pub fn annotation_string(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_strips_leading_separator() {
        let import = Import::new("\\Spiral\\ORM\\Record");
        assert_eq!(import.name, "Spiral\\ORM\\Record");
        assert_eq!(import.local_name(), "Record");
    }

    #[test]
    fn aliased_import_local_name() {
        let import = Import::aliased("Cycle\\Annotated\\Annotation", "Cycle");
        assert_eq!(import.local_name(), "Cycle");
    }

    #[test]
    fn empty_array_detection() {
        assert!(PhpValue::empty_array().is_empty_array());
        assert!(PhpValue::Map(vec![]).is_empty_array());
        assert!(!PhpValue::strings(["a"]).is_empty_array());
        assert!(!PhpValue::str("").is_empty_array());
    }

    #[test]
    fn php_string_escapes_quotes_and_backslashes() {
        assert_eq!(php_string("users"), "'users'");
        assert_eq!(php_string("o'brien"), "'o\\'brien'");
        assert_eq!(php_string("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn annotation_string_doubles_quotes() {
        assert_eq!(annotation_string("post"), "\"post\"");
        assert_eq!(annotation_string("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(
            annotation_string("App\\Repository\\PostRepository"),
            "\"App\\Repository\\PostRepository\""
        );
    }
}
