use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{
        Declaration,
        php::{Constant, PhpValue},
    },
    error::DomainError,
    field::{FieldSpec, TypeMapping},
};

/// Request filter; fields map to `SCHEMA`, `VALIDATES` and `SETTERS`
/// entries through the type table.
#[derive(Debug, Clone)]
pub struct FilterDeclaration {
    declaration: Declaration,
    mapping: TypeMapping,
    schema: Vec<(String, PhpValue)>,
    validates: Vec<(String, PhpValue)>,
    setters: Vec<(String, PhpValue)>,
}

impl FilterDeclaration {
    pub fn new(declaration: Declaration, mapping: TypeMapping) -> Self {
        Self {
            declaration,
            mapping,
            schema: Vec::new(),
            validates: Vec::new(),
            setters: Vec::new(),
        }
    }

    pub fn declare_field(&mut self, field: FieldSpec) -> Result<(), DomainError> {
        let entry = self.mapping.resolve(field.kind()).clone();
        let name = field.name().to_string();
        self.declaration.declare_field(field)?;

        self.schema
            .push((name.clone(), PhpValue::str(entry.origin(&name))));
        if !entry.validates.is_empty() {
            self.validates
                .push((name.clone(), PhpValue::strings(entry.validates)));
        }
        if let Some(setter) = entry.setter {
            self.setters.push((name, PhpValue::str(setter)));
        }
        Ok(())
    }
}

impl Declare for FilterDeclaration {
    declaration_access!();

    fn build(mut self) -> Result<Declaration, DomainError> {
        self.declaration
            .set_constant(Constant::new("SCHEMA", PhpValue::Map(self.schema)));
        self.declaration
            .set_constant(Constant::new("VALIDATES", PhpValue::Map(self.validates)));
        self.declaration
            .set_constant(Constant::new("SETTERS", PhpValue::Map(self.setters)));
        Ok(self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{declarations::fixtures::draft, value_objects::DeclarationKind};

    fn filter() -> FilterDeclaration {
        FilterDeclaration::new(draft(DeclarationKind::Filter, "signup"), TypeMapping::default())
    }

    fn entry<'a>(value: &'a PhpValue, key: &str) -> Option<&'a PhpValue> {
        match value {
            PhpValue::Map(items) => items.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    #[test]
    fn typed_fields_follow_mapping() {
        let mut filter = filter();
        filter.declare_field(FieldSpec::new("age", "int")).unwrap();
        filter.declare_field(FieldSpec::new("email", "email")).unwrap();
        filter.declare_field(FieldSpec::new("avatar", "image")).unwrap();
        let decl = filter.finish().unwrap();

        let schema = &decl.constant("SCHEMA").unwrap().value;
        assert_eq!(entry(schema, "age"), Some(&PhpValue::str("data:age")));
        assert_eq!(entry(schema, "avatar"), Some(&PhpValue::str("file:avatar")));

        let validates = &decl.constant("VALIDATES").unwrap().value;
        assert_eq!(
            entry(validates, "age"),
            Some(&PhpValue::strings(["notEmpty", "integer"]))
        );
        assert_eq!(
            entry(validates, "email"),
            Some(&PhpValue::strings(["notEmpty", "string", "email"]))
        );

        let setters = &decl.constant("SETTERS").unwrap().value;
        assert_eq!(entry(setters, "age"), Some(&PhpValue::str("intval")));
        assert_eq!(entry(setters, "email"), Some(&PhpValue::str("strval")));
        assert_eq!(entry(setters, "avatar"), None);
    }

    #[test]
    fn unknown_type_uses_fallback() {
        let mut filter = filter();
        filter.declare_field(FieldSpec::new("nickname", "whatever")).unwrap();
        let decl = filter.finish().unwrap();
        let setters = &decl.constant("SETTERS").unwrap().value;
        assert_eq!(entry(setters, "nickname"), Some(&PhpValue::str("strval")));
    }

    #[test]
    fn duplicate_field_leaves_constants_untouched() {
        let mut filter = filter();
        filter.declare_field(FieldSpec::new("age", "int")).unwrap();
        assert!(filter.declare_field(FieldSpec::new("age", "float")).is_err());
        let decl = filter.finish().unwrap();
        match &decl.constant("SCHEMA").unwrap().value {
            PhpValue::Map(items) => assert_eq!(items.len(), 1),
            other => panic!("unexpected schema {other:?}"),
        }
    }

    #[test]
    fn empty_filter_has_empty_arrays() {
        let decl = filter().finish().unwrap();
        for name in ["SCHEMA", "VALIDATES", "SETTERS"] {
            assert!(decl.constant(name).unwrap().value.is_empty_array());
        }
    }
}
