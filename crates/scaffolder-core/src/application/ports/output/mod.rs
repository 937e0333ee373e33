//! Driven (output) ports - implemented by infrastructure.
//!
//! The `scaffolder-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Declaration, PhpValue};
use crate::error::ScaffolderResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffolder_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffolder_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are relative to the application root; the
/// adapter decides what that root is.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffolderResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffolderResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8.
    fn read_file(&self, path: &Path) -> ScaffolderResult<String>;
}

/// Port for turning declarations into PHP source.
///
/// Implemented by `scaffolder_adapters::renderer::PhpRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait SourceRenderer: Send + Sync {
    /// Render a finished declaration into a complete PHP file.
    fn render(&self, declaration: &Declaration) -> ScaffolderResult<String>;

    /// Render a PHP file that only returns `value`, e.g. a config file.
    fn render_return_file(&self, header: &[String], value: &PhpValue) -> ScaffolderResult<String>;
}

/// Port for the current time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Timestamp prefix for migration file names, `YYYYMMDD.HHMMSS`.
    fn migration_stamp(&self) -> String;
}
