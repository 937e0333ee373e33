pub mod common;
pub mod declaration;
pub mod file_plan;
pub mod php;

pub use crate::domain::DomainError;
pub use declaration::Declaration;
pub use file_plan::FilePlan;
