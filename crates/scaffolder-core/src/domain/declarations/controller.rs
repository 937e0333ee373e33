use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{Declaration, declaration::is_identifier, php::Method},
    error::DomainError,
};

const PROTOTYPE_TRAIT: &str = "Spiral\\Prototype\\Traits\\PrototypeTrait";

/// Controller using the prototype trait, one public method per action.
#[derive(Debug, Clone)]
pub struct ControllerDeclaration {
    declaration: Declaration,
}

impl ControllerDeclaration {
    pub fn new(mut declaration: Declaration) -> Self {
        declaration.add_trait(PROTOTYPE_TRAIT);
        Self { declaration }
    }

    pub fn add_action(&mut self, action: &str) -> Result<(), DomainError> {
        let action = action.trim();
        if !is_identifier(action) {
            return Err(DomainError::InvalidName {
                name: action.to_string(),
                reason: "action names must be valid PHP identifiers".into(),
            });
        }
        self.declaration.set_method(Method::new(action));
        Ok(())
    }
}

impl Declare for ControllerDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}
