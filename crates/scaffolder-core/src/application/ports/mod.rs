//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside
//! world. Adapters in `scaffolder-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: file operations
//!   - `SourceRenderer`: declaration → PHP source
//!   - `Clock`: timestamps for migration file names
//!
//! - **Driving (Input) Ports**: the CLI command handlers, calling the services directly

pub mod output;

pub use output::{Clock, Filesystem, SourceRenderer};

#[cfg(test)]
pub use output::{MockClock, MockFilesystem, MockSourceRenderer};
