use heck::{ToLowerCamelCase, ToSnakeCase};

use crate::domain::{
    declarations::{Declare, column_type, declaration_access, non_blank},
    entities::{
        Declaration,
        php::{Import, Property, annotation_string},
    },
    error::DomainError,
    field::FieldSpec,
    value_objects::{Inflection, Visibility},
};

const ANNOTATION_NAMESPACE: &str = "Cycle\\Annotated\\Annotation";
const ANNOTATION_ALIAS: &str = "Cycle";

/// Annotated ORM entity: a class-level `@Cycle\Entity` annotation and one
/// `@Cycle\Column` property per field.
#[derive(Debug, Clone)]
pub struct EntityDeclaration {
    declaration: Declaration,
    role: Option<String>,
    mapper: Option<String>,
    repository: Option<String>,
    table: Option<String>,
    database: Option<String>,
    inflection: Option<Inflection>,
    accessibility: Visibility,
}

impl EntityDeclaration {
    pub fn new(mut declaration: Declaration) -> Self {
        declaration.add_import(Import::aliased(ANNOTATION_NAMESPACE, ANNOTATION_ALIAS));
        Self {
            declaration,
            role: None,
            mapper: None,
            repository: None,
            table: None,
            database: None,
            inflection: None,
            accessibility: Visibility::Public,
        }
    }

    pub fn set_role(&mut self, role: Option<&str>) {
        self.role = non_blank(role);
    }

    pub fn set_mapper(&mut self, mapper: Option<&str>) {
        self.mapper = non_blank(mapper);
    }

    pub fn set_repository(&mut self, repository: Option<&str>) {
        self.repository = non_blank(repository);
    }

    pub fn set_table(&mut self, table: Option<&str>) {
        self.table = non_blank(table);
    }

    pub fn set_database(&mut self, database: Option<&str>) {
        self.database = non_blank(database);
    }

    pub fn set_inflection(&mut self, inflection: Option<Inflection>) {
        self.inflection = inflection;
    }

    /// Visibility of generated field properties.
    pub fn set_accessibility(&mut self, accessibility: Visibility) {
        self.accessibility = accessibility;
    }

    pub fn declare_field(&mut self, field: FieldSpec) -> Result<(), DomainError> {
        self.declaration.declare_field(field)
    }

    fn entity_annotation(&self) -> String {
        let attributes: Vec<String> = [
            ("role", &self.role),
            ("mapper", &self.mapper),
            ("repository", &self.repository),
            ("table", &self.table),
            ("database", &self.database),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|v| format!("{key} = {}", annotation_string(v)))
        })
        .collect();

        if attributes.is_empty() {
            format!("@{ANNOTATION_ALIAS}\\Entity")
        } else {
            format!("@{ANNOTATION_ALIAS}\\Entity({})", attributes.join(", "))
        }
    }

    fn column_annotation(&self, field: &FieldSpec) -> String {
        let kind = column_type(field.kind());
        let column = self.inflection.map(|i| inflect(i, field.name()));
        match column {
            Some(column) if column != field.name() => format!(
                "@{ANNOTATION_ALIAS}\\Column(type = {}, name = {})",
                annotation_string(kind),
                annotation_string(&column)
            ),
            _ => format!(
                "@{ANNOTATION_ALIAS}\\Column(type = {})",
                annotation_string(kind)
            ),
        }
    }
}

impl Declare for EntityDeclaration {
    declaration_access!();

    fn build(mut self) -> Result<Declaration, DomainError> {
        let annotation = self.entity_annotation();
        if !self.declaration.comment().is_empty() {
            self.declaration.add_comment_line("");
        }
        self.declaration.add_comment_line(annotation);

        let properties: Vec<Property> = self
            .declaration
            .fields()
            .iter()
            .map(|field| {
                Property::new(field.name(), self.accessibility)
                    .with_comment(self.column_annotation(field))
            })
            .collect();
        for property in properties {
            self.declaration.set_property(property);
        }

        Ok(self.declaration)
    }
}

/// Column name for a field under an inflection.
pub fn inflect(inflection: Inflection, name: &str) -> String {
    match inflection {
        Inflection::Tableize => name.to_snake_case(),
        Inflection::Camelize => name.to_lower_camel_case(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{declarations::fixtures::draft, value_objects::DeclarationKind};

    fn entity() -> EntityDeclaration {
        EntityDeclaration::new(draft(DeclarationKind::Entity, "user"))
    }

    #[test]
    fn bare_entity_annotation() {
        let decl = entity().finish().unwrap();
        assert_eq!(decl.name(), "User");
        assert_eq!(decl.comment(), &["@Cycle\\Entity".to_string()]);
        assert_eq!(decl.imports()[0].local_name(), "Cycle");
    }

    #[test]
    fn entity_attributes_and_comment() {
        let mut entity = entity();
        entity.declaration_mut().set_comment("Registered user.");
        entity.set_role(Some("user"));
        entity.set_repository(Some("App\\Repository\\UserRepository"));
        entity.set_table(Some("users"));
        entity.set_database(Some(""));

        let decl = entity.finish().unwrap();
        assert_eq!(
            decl.comment(),
            &[
                "Registered user.".to_string(),
                "".into(),
                "@Cycle\\Entity(role = \"user\", repository = \"App\\Repository\\UserRepository\", table = \"users\")".into(),
            ]
        );
    }

    #[test]
    fn columns_with_inflection() {
        let mut entity = entity();
        entity.set_inflection(Some(Inflection::Tableize));
        entity.set_accessibility(Visibility::Protected);
        entity.declare_field(FieldSpec::new("id", "primary")).unwrap();
        entity.declare_field(FieldSpec::new("createdAt", "datetime")).unwrap();

        let decl = entity.finish().unwrap();
        let id = decl.property("id").unwrap();
        assert_eq!(id.visibility, Visibility::Protected);
        assert_eq!(id.comment, vec!["@Cycle\\Column(type = \"primary\")".to_string()]);
        assert_eq!(
            decl.property("createdAt").unwrap().comment,
            vec!["@Cycle\\Column(type = \"datetime\", name = \"created_at\")".to_string()]
        );
    }

    #[test]
    fn quotes_in_attributes_are_doubled() {
        let mut entity = entity();
        entity.set_table(Some("big \"users\""));
        entity.declare_field(FieldSpec::new("tag", "enum(\"a\")")).unwrap();

        let decl = entity.finish().unwrap();
        assert_eq!(
            decl.comment(),
            &["@Cycle\\Entity(table = \"big \"\"users\"\"\")".to_string()]
        );
        assert_eq!(
            decl.property("tag").unwrap().comment,
            vec!["@Cycle\\Column(type = \"enum(\"\"a\"\")\")".to_string()]
        );
    }

    #[test]
    fn camelize() {
        assert_eq!(inflect(Inflection::Camelize, "created_at"), "createdAt");
        assert_eq!(inflect(Inflection::Tableize, "createdAt"), "created_at");
    }
}
