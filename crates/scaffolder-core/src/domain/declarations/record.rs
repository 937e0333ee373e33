use crate::domain::{
    declarations::{Declare, declaration_access, non_blank},
    entities::{
        Declaration,
        php::{Constant, PhpValue},
    },
    error::DomainError,
    field::{FieldSpec, TypeMapping},
    value_objects::FieldSource,
};

/// Active-record model: `SCHEMA` holds declared types verbatim, `SETTERS`
/// come from the type table.
#[derive(Debug, Clone)]
pub struct RecordDeclaration {
    declaration: Declaration,
    mapping: TypeMapping,
    table: Option<String>,
    database: Option<String>,
}

impl RecordDeclaration {
    pub fn new(declaration: Declaration, mapping: TypeMapping) -> Self {
        Self {
            declaration,
            mapping,
            table: None,
            database: None,
        }
    }

    pub fn set_table(&mut self, table: Option<&str>) {
        self.table = non_blank(table);
    }

    pub fn set_database(&mut self, database: Option<&str>) {
        self.database = non_blank(database);
    }

    pub fn declare_field(&mut self, field: FieldSpec) -> Result<(), DomainError> {
        self.declaration.declare_field(field)
    }
}

impl Declare for RecordDeclaration {
    declaration_access!();

    fn build(mut self) -> Result<Declaration, DomainError> {
        if let Some(table) = self.table {
            self.declaration
                .set_constant(Constant::new("TABLE", PhpValue::str(table)));
        }
        if let Some(database) = self.database {
            self.declaration
                .set_constant(Constant::new("DATABASE", PhpValue::str(database)));
        }

        let mut schema = Vec::new();
        let mut setters = Vec::new();
        for field in self.declaration.fields() {
            schema.push((field.name().to_string(), PhpValue::str(field.kind())));

            let entry = self.mapping.resolve(field.kind());
            if let (FieldSource::Data, Some(setter)) = (entry.source, &entry.setter) {
                setters.push((field.name().to_string(), PhpValue::str(setter.clone())));
            }
        }

        self.declaration
            .set_constant(Constant::new("SCHEMA", PhpValue::Map(schema)));
        if !setters.is_empty() {
            self.declaration
                .set_constant(Constant::new("SETTERS", PhpValue::Map(setters)));
        }
        self.declaration
            .set_constant(Constant::new("DEFAULTS", PhpValue::empty_array()));
        self.declaration
            .set_constant(Constant::new("INDEXES", PhpValue::empty_array()));

        Ok(self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{declarations::fixtures::draft, value_objects::DeclarationKind};

    fn record() -> RecordDeclaration {
        RecordDeclaration::new(draft(DeclarationKind::Record, "user"), TypeMapping::default())
    }

    #[test]
    fn record_constants_in_order() {
        let mut record = record();
        record.set_table(Some("users"));
        record.set_database(Some("primary"));
        record.declare_field(FieldSpec::new("id", "primary")).unwrap();
        record.declare_field(FieldSpec::new("age", "int")).unwrap();

        let decl = record.finish().unwrap();
        assert_eq!(decl.fqcn(), "App\\Database\\User");
        assert_eq!(decl.parent(), Some("Spiral\\ORM\\Record"));

        let names: Vec<_> = decl.constants().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["TABLE", "DATABASE", "SCHEMA", "SETTERS", "DEFAULTS", "INDEXES"]
        );
        assert_eq!(
            decl.constant("SCHEMA").unwrap().value,
            PhpValue::Map(vec![
                ("id".into(), PhpValue::str("primary")),
                ("age".into(), PhpValue::str("int")),
            ])
        );
    }

    #[test]
    fn no_fields_no_setters() {
        let decl = record().finish().unwrap();
        assert!(decl.constant("SETTERS").is_none());
        assert!(decl.constant("TABLE").is_none());
        assert!(decl.constant("SCHEMA").unwrap().value.is_empty_array());
    }

    #[test]
    fn file_fields_get_no_setter() {
        let mut record = record();
        record.declare_field(FieldSpec::new("avatar", "image")).unwrap();
        record.declare_field(FieldSpec::new("email", "email")).unwrap();
        let decl = record.finish().unwrap();
        assert_eq!(
            decl.constant("SETTERS").unwrap().value,
            PhpValue::Map(vec![("email".into(), PhpValue::str("strval"))])
        );
    }
}
