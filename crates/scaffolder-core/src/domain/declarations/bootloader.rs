use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{
        Declaration,
        php::{Constant, Method, PhpValue},
    },
    error::DomainError,
};

/// Bootloader with empty `BINDINGS`/`SINGLETONS` and a `boot()` hook.
#[derive(Debug, Clone)]
pub struct BootloaderDeclaration {
    declaration: Declaration,
}

impl BootloaderDeclaration {
    pub fn new(mut declaration: Declaration) -> Self {
        declaration.set_constant(Constant::new("BINDINGS", PhpValue::empty_array()));
        declaration.set_constant(Constant::new("SINGLETONS", PhpValue::empty_array()));
        declaration.set_method(Method::new("boot").returns("void"));
        Self { declaration }
    }
}

impl Declare for BootloaderDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}
