use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{
        Declaration,
        php::{Constant, Method, PhpValue},
    },
    error::DomainError,
    value_objects::Visibility,
};

/// Console command with `NAME`, `DESCRIPTION`, `ARGUMENTS` and `OPTIONS`.
#[derive(Debug, Clone)]
pub struct CommandDeclaration {
    declaration: Declaration,
}

impl CommandDeclaration {
    /// `alias` is the console name the command is invoked by.
    pub fn new(mut declaration: Declaration, alias: &str) -> Self {
        declaration.set_constant(Constant::new("NAME", PhpValue::str(alias)));
        declaration.set_constant(Constant::new("DESCRIPTION", PhpValue::str("")));
        declaration.set_constant(Constant::new("ARGUMENTS", PhpValue::empty_array()));
        declaration.set_constant(Constant::new("OPTIONS", PhpValue::empty_array()));
        declaration.set_method(
            Method::new("perform")
                .visibility(Visibility::Protected)
                .returns("void")
                .with_comment("Perform command"),
        );
        Self { declaration }
    }

    pub fn set_alias(&mut self, alias: &str) {
        self.declaration
            .set_constant(Constant::new("NAME", PhpValue::str(alias)));
    }

    pub fn set_description(&mut self, description: &str) {
        self.declaration
            .set_constant(Constant::new("DESCRIPTION", PhpValue::str(description)));
    }
}

impl Declare for CommandDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}
