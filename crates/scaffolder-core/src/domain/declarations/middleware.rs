use crate::domain::{
    declarations::{Declare, declaration_access},
    entities::{
        Declaration,
        php::{Import, Method, Parameter},
    },
    error::DomainError,
};

const MIDDLEWARE_INTERFACE: &str = "Psr\\Http\\Server\\MiddlewareInterface";
const REQUEST: &str = "Psr\\Http\\Message\\ServerRequestInterface";
const RESPONSE: &str = "Psr\\Http\\Message\\ResponseInterface";
const HANDLER: &str = "Psr\\Http\\Server\\RequestHandlerInterface";

/// PSR-15 middleware passing the request straight to the handler.
#[derive(Debug, Clone)]
pub struct MiddlewareDeclaration {
    declaration: Declaration,
}

impl MiddlewareDeclaration {
    pub fn new(mut declaration: Declaration) -> Self {
        declaration.add_interface(MIDDLEWARE_INTERFACE);
        for import in [REQUEST, RESPONSE, HANDLER] {
            declaration.add_import(Import::new(import));
        }
        declaration.set_method(
            Method::new("process")
                .param(Parameter::new("request").typed("ServerRequestInterface"))
                .param(Parameter::new("handler").typed("RequestHandlerInterface"))
                .returns("ResponseInterface")
                .line("return $handler->handle($request);"),
        );
        Self { declaration }
    }
}

impl Declare for MiddlewareDeclaration {
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
    fn middleware_has_no_postfix_and_imports_psr_types() {
        let decl = MiddlewareDeclaration::new(draft(DeclarationKind::Middleware, "auth"))
            .finish()
            .unwrap();
        assert_eq!(decl.name(), "Auth");
        assert_eq!(decl.interfaces(), &[MIDDLEWARE_INTERFACE.to_string()]);
        assert_eq!(decl.imports().len(), 4);
        assert_eq!(decl.method("process").unwrap().parameters.len(), 2);
    }
}
