//! Domain value objects: DeclarationKind, Visibility, FieldSource, Inflection.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO defaults. Namespaces, postfixes and parent classes live in
//! `registry.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a `KindDef` entry in `registry.rs`
//! 4. Add a builder under `declarations/`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DeclarationKind ──────────────────────────────────────────────────────────

/// The kind of class a `create:*` command generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Bootloader,
    Config,
    Controller,
    Middleware,
    Command,
    JobHandler,
    Migration,
    Filter,
    Entity,
    Repository,
    Record,
}

impl DeclarationKind {
    /// All kinds, in registry order.
    pub const ALL: [DeclarationKind; 11] = [
        Self::Bootloader,
        Self::Config,
        Self::Controller,
        Self::Middleware,
        Self::Command,
        Self::JobHandler,
        Self::Migration,
        Self::Filter,
        Self::Entity,
        Self::Repository,
        Self::Record,
    ];

    /// Key used in configuration files and in the `create:<key>` command name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bootloader => "bootloader",
            Self::Config => "config",
            Self::Controller => "controller",
            Self::Middleware => "middleware",
            Self::Command => "command",
            Self::JobHandler => "jobHandler",
            Self::Migration => "migration",
            Self::Filter => "filter",
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Record => "record",
        }
    }

    /// Console command name, e.g. `create:record`.
    pub fn command_name(&self) -> String {
        format!("create:{}", self.as_str())
    }

    /// Whether the kind accepts `--field name:type` declarations.
    pub const fn accepts_fields(self) -> bool {
        matches!(
            self,
            Self::Migration | Self::Filter | Self::Entity | Self::Record
        )
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclarationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix("create:").unwrap_or(s);
        match key.to_ascii_lowercase().as_str() {
            "bootloader" => Ok(Self::Bootloader),
            "config" => Ok(Self::Config),
            "controller" => Ok(Self::Controller),
            "middleware" => Ok(Self::Middleware),
            "command" => Ok(Self::Command),
            "jobhandler" | "job" => Ok(Self::JobHandler),
            "migration" => Ok(Self::Migration),
            "filter" => Ok(Self::Filter),
            "entity" => Ok(Self::Entity),
            "repository" => Ok(Self::Repository),
            "record" => Ok(Self::Record),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

// ── Visibility ───────────────────────────────────────────────────────────────

/// PHP member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            _ => Err(DomainError::UnknownVisibility(s.to_string())),
        }
    }
}

// ── FieldSource ──────────────────────────────────────────────────────────────

/// Where a filter reads a field from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSource {
    #[default]
    Data,
    File,
    Query,
    Header,
}

impl FieldSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::File => "file",
            Self::Query => "query",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Inflection ───────────────────────────────────────────────────────────────

/// Column naming strategy for annotated entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inflection {
    /// `createdAt` → `created_at`
    Tableize,
    /// `created_at` → `createdAt`
    Camelize,
}

impl Inflection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tableize => "tableize",
            Self::Camelize => "camelize",
        }
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Inflection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tableize" | "t" => Ok(Self::Tableize),
            "camelize" | "c" => Ok(Self::Camelize),
            _ => Err(DomainError::UnknownInflection(s.to_string())),
        }
    }
}
