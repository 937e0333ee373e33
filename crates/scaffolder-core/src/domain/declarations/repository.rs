use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::Declaration,
    error::DomainError,
};

/// ORM repository; only the parent class is generated.
#[derive(Debug, Clone)]
pub struct RepositoryDeclaration {
    declaration: Declaration,
}

impl RepositoryDeclaration {
    pub fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }
}

impl Declare for RepositoryDeclaration {
    declaration_access!();

    fn build(self) -> Result<Declaration, DomainError> {
        Ok(self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{declarations::fixtures::draft, value_objects::DeclarationKind};

    #[test]
    fn repository_extends_select_repository() {
        let decl = RepositoryDeclaration::new(draft(DeclarationKind::Repository, "user"))
            .finish()
            .unwrap();
        assert_eq!(decl.name(), "UserRepository");
        assert_eq!(decl.type_reference("Cycle\\ORM\\Select\\Repository"), "Repository");
        assert!(decl.constants().is_empty());
        assert!(decl.methods().is_empty());
    }
}
