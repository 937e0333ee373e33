//! Command handlers.  Each translates parsed arguments into core calls and
//! reports through [`crate::output::OutputManager`]; none holds business
//! logic of its own.

pub mod completions;
pub mod create;
pub mod init;
pub mod list;
pub mod settings;
