//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use scaffolder_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffolderError, ScaffolderResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Relative paths resolve against `root`, the application directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Adapter rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            root: PathBuf::new(),
        }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffolderResult<()> {
        std::fs::create_dir_all(self.resolve(path))
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffolderResult<()> {
        std::fs::write(self.resolve(path), content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn read_file(&self, path: &Path) -> ScaffolderResult<String> {
        std::fs::read_to_string(self.resolve(path)).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffolderError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_relative_to_root() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(dir.path());

        fs.create_dir_all(Path::new("app/src/Filter")).unwrap();
        fs.write_file(Path::new("app/src/Filter/UserFilter.php"), "<?php")
            .unwrap();

        assert!(fs.exists(Path::new("app/src/Filter/UserFilter.php")));
        assert!(dir.path().join("app/src/Filter/UserFilter.php").is_file());
        assert_eq!(
            fs.read_file(Path::new("app/src/Filter/UserFilter.php")).unwrap(),
            "<?php"
        );
    }

    #[test]
    fn missing_parent_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::with_root(dir.path());

        let err = fs
            .write_file(Path::new("missing/File.php"), "<?php")
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffolderError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
