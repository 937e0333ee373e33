use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Files produced by one `create:*` invocation, ready for materialization.
///
/// This is the output of rendering. It contains no business logic, only
/// data. The class file always comes first; companion files (a config
/// kind's `app/config/<name>.php`) follow.
#[derive(Debug, Clone, Default)]
pub struct FilePlan {
    pub(crate) files: Vec<PlannedFile>,
}

impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, content: String, role: FileRole) {
        self.files.push(PlannedFile {
            path: path.into(),
            content,
            role,
        });
    }

    pub fn with(mut self, path: impl Into<PathBuf>, content: String, role: FileRole) -> Self {
        self.add(path, content, role);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidDeclaration(
                "nothing to generate".into(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::InvalidDeclaration(format!(
                    "file planned twice: {}",
                    file.path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    pub fn class_file(&self) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.role == FileRole::Class)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// The generated class.
    Class,
    /// A file written alongside the class.
    Companion,
}

impl FileRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Companion => "companion",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    pub role: FileRole,
}

impl PlannedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
