use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{Declaration, php::Method},
    error::DomainError,
};

#[derive(Debug, Clone)]
pub struct JobHandlerDeclaration {
    declaration: Declaration,
}

impl JobHandlerDeclaration {
    pub fn new(mut declaration: Declaration) -> Self {
        declaration.set_method(Method::new("invoke").returns("void"));
        Self { declaration }
    }
}

impl Declare for JobHandlerDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}
