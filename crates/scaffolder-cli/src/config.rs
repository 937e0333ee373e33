//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ScaffolderSettings`] produced by [`AppConfig::settings`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SCAFFOLDER_NAMESPACE`,
//!    `SCAFFOLDER_PROJECT__NAME`, `SCAFFOLDER_DECLARATIONS__FILTER__POSTFIX`, ...
//! 3. Config file: `--config FILE`, else `./scaffolder.toml`, else
//!    `scaffolder.toml` in the platform config directory
//! 4. Built-in defaults from the declaration registry (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use scaffolder_core::domain::{
    DeclarationKind, FieldMapping, ScaffolderSettings,
    settings::{AUTHOR_NAME, PROJECT_NAME},
};

use crate::error::{CliError, CliResult};

/// File name looked up in the working directory and the config directory.
pub const CONFIG_FILE_NAME: &str = "scaffolder.toml";

const ENV_PREFIX: &str = "SCAFFOLDER";

/// `[mapping]` key that replaces the entry used for unknown field types.
pub const FALLBACK_MAPPING_KEY: &str = "null";

/// User configuration.  Every field is a partial override of the registry
/// defaults; anything left out keeps its built-in value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root namespace of generated classes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Source directory classes are written under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Header docblock lines, may contain `{project-name}` / `{author-name}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<String>>,

    pub project: ProjectConfig,

    /// Extra header placeholders, keyed without braces.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub placeholders: BTreeMap<String, String>,

    /// Per-kind overrides keyed by kind name (`controller`, `jobHandler`, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub declarations: BTreeMap<String, KindOverride>,

    /// Filter type table entries, added to or replacing the built-in ones.
    /// The `null` entry is used for types missing from the table.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mapping: BTreeMap<String, FieldMapping>,

    pub output: OutputConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Substituted for `{project-name}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Substituted for `{author-name}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    /// Companion directory (config files, migrations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// discovered default locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        let source = match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(true));
                Some(path.clone())
            }
            None => {
                let found = Self::discover();
                if let Some(path) = &found {
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
                found
            }
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator("|")
                .with_list_parse_key("header"),
        );

        let mut config: AppConfig = builder.build()?.try_deserialize()?;
        config.source = source;

        debug!(source = ?config.source, "Configuration loaded");
        Ok(config)
    }

    /// First existing config file: working directory, then config directory.
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.is_file())
    }

    /// `scaffolder.toml` in the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "scaffolder", "scaffolder")
            .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
    }

    /// The file in use, or where `scaffolder init` would create one.
    pub fn config_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Merge the overrides onto the registry defaults.
    pub fn settings(&self) -> CliResult<ScaffolderSettings> {
        let mut settings = ScaffolderSettings::default();

        if let Some(namespace) = &self.namespace {
            settings.namespace = namespace.trim_matches('\\').to_string();
        }
        if let Some(directory) = &self.directory {
            settings.directory = directory.clone();
        }
        if let Some(header) = &self.header {
            settings.header = header.clone();
        }

        for (key, value) in &self.placeholders {
            settings.set_placeholder(key.as_str(), value.as_str());
        }
        if let Some(name) = &self.project.name {
            settings.set_placeholder(PROJECT_NAME, name.as_str());
        }
        if let Some(author) = &self.project.author {
            settings.set_placeholder(AUTHOR_NAME, author.as_str());
        }

        for (key, overrides) in &self.declarations {
            let kind: DeclarationKind = key.parse().map_err(|e| CliError::ConfigError {
                message: format!("unknown declaration kind '{key}' in [declarations]"),
                source: Some(Box::new(e)),
            })?;

            let mut current = settings.kind(kind);
            if let Some(namespace) = &overrides.namespace {
                current.namespace = namespace.trim_matches('\\').to_string();
            }
            if let Some(postfix) = &overrides.postfix {
                current.postfix = postfix.clone();
            }
            if let Some(directory) = &overrides.directory {
                current.directory = Some(directory.clone());
            }
            settings.declarations.insert(kind, current);
        }

        for (kind, mapping) in &self.mapping {
            if kind.eq_ignore_ascii_case(FALLBACK_MAPPING_KEY) {
                settings.mapping.set_fallback(mapping.clone());
            } else {
                settings.mapping.insert(kind, mapping.clone());
            }
        }

        Ok(settings)
    }

    /// Fully spelled-out configuration, as written by `scaffolder init`.
    pub fn template() -> Self {
        let defaults = ScaffolderSettings::default();

        let declarations = DeclarationKind::ALL
            .iter()
            .map(|kind| {
                let current = defaults.kind(*kind);
                (
                    kind.as_str().to_string(),
                    KindOverride {
                        namespace: Some(current.namespace),
                        postfix: Some(current.postfix),
                        directory: current.directory,
                    },
                )
            })
            .collect();

        let mut mapping: BTreeMap<String, FieldMapping> = defaults
            .mapping
            .iter()
            .map(|(kind, mapping)| (kind.to_string(), mapping.clone()))
            .collect();
        mapping.insert(
            FALLBACK_MAPPING_KEY.to_string(),
            defaults.mapping.fallback().clone(),
        );

        Self {
            namespace: Some(defaults.namespace),
            directory: Some(defaults.directory),
            header: Some(defaults.header),
            project: ProjectConfig::default(),
            placeholders: BTreeMap::new(),
            declarations,
            mapping,
            output: OutputConfig::default(),
            source: None,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
