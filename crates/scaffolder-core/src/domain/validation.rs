use crate::domain::{
    entities::{Declaration, FilePlan, declaration::is_identifier},
    error::DomainError,
    naming::NAMESPACE_SEPARATOR,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Checks run on a finished declaration before it is rendered.
    pub fn validate_declaration(declaration: &Declaration) -> Result<(), DomainError> {
        if !is_identifier(declaration.name()) {
            return Err(DomainError::InvalidName {
                name: declaration.name().to_string(),
                reason: "class names must be valid PHP identifiers".into(),
            });
        }

        for part in declaration
            .namespace()
            .split(NAMESPACE_SEPARATOR)
            .filter(|p| !p.is_empty())
        {
            if !is_identifier(part) {
                return Err(DomainError::InvalidName {
                    name: declaration.namespace().to_string(),
                    reason: format!("namespace segment '{part}' is not a valid identifier"),
                });
            }
        }

        for constant in declaration.constants() {
            if !is_identifier(&constant.name) {
                return Err(DomainError::InvalidDeclaration(format!(
                    "constant name '{}' is not a valid identifier",
                    constant.name
                )));
            }
        }

        for method in declaration.methods() {
            if !is_identifier(&method.name) {
                return Err(DomainError::InvalidName {
                    name: method.name.clone(),
                    reason: "method names must be valid PHP identifiers".into(),
                });
            }
        }

        Ok(())
    }

    pub fn validate_file_plan(plan: &FilePlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
