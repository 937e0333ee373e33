use crate::domain::{
    declarations::{Declare, column_type, declaration_access, non_blank},
    entities::{
        Declaration,
        php::{Method, php_string},
    },
    error::DomainError,
    field::FieldSpec,
};

/// Migration with `up()`/`down()`, optionally creating one table.
#[derive(Debug, Clone)]
pub struct MigrationDeclaration {
    declaration: Declaration,
    table: Option<String>,
}

impl MigrationDeclaration {
    pub fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            table: None,
        }
    }

    pub fn set_table(&mut self, table: Option<&str>) {
        self.table = non_blank(table);
    }

    pub fn declare_field(&mut self, field: FieldSpec) -> Result<(), DomainError> {
        self.declaration.declare_field(field)
    }
}

impl Declare for MigrationDeclaration {
    declaration_access!();

    fn build(mut self) -> Result<Declaration, DomainError> {
        let mut up = Method::new("up").returns("void");
        let mut down = Method::new("down").returns("void");

        match &self.table {
            Some(table) => {
                let table = php_string(table);
                up = up.line(format!("$this->table({table})"));
                for field in self.declaration.fields() {
                    up = up.line(format!(
                        "    ->addColumn({}, {})",
                        php_string(field.name()),
                        php_string(column_type(field.kind()))
                    ));
                }
                up = up.line("    ->create();");
                down = down.line(format!("$this->table({table})->drop();"));
            }
            None if !self.declaration.fields().is_empty() => {
                return Err(DomainError::InvalidDeclaration(
                    "migration columns need a table, pass --table".into(),
                ));
            }
            None => {}
        }

        self.declaration.set_method(up.with_comment("Create tables, add columns or insert data here"));
        self.declaration.set_method(down.with_comment("Drop created, columns etc here"));
        Ok(self.declaration)
    }
}
