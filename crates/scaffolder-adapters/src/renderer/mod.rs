//! Source renderers.

mod php;

pub use php::PhpRenderer;
