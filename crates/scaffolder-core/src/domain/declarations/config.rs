use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{
        Declaration,
        php::{Constant, PhpValue, Property},
    },
    error::DomainError,
    value_objects::Visibility,
};

/// Injectable config class bound to `app/config/<name>.php`.
#[derive(Debug, Clone)]
pub struct ConfigDeclaration {
    declaration: Declaration,
    config_name: String,
}

impl ConfigDeclaration {
    pub fn new(mut declaration: Declaration, config_name: impl Into<String>) -> Self {
        let config_name = config_name.into();
        declaration.set_constant(Constant::new("CONFIG", PhpValue::str(config_name.clone())).public());
        declaration.set_property(
            Property::new("config", Visibility::Protected)
                .with_default(PhpValue::empty_array())
                .with_comment("@internal For internal usage. Will be hydrated in the constructor."),
        );
        Self {
            declaration,
            config_name,
        }
    }

    /// Key of the config file, e.g. `database` for `app/config/database.php`.
    pub fn config_name(&self) -> &str {
        &self.config_name
    }
}

impl Declare for ConfigDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}
