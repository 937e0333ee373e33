//! `scaffolder settings`: inspect the effective settings.
//!
//! Shows what generation will actually use: registry defaults with the
//! config file and `SCAFFOLDER_*` overrides merged on top.

use serde_json::Value;

use crate::{
    cli::{OutputFormat, SettingsCommands},
    config::{AppConfig, FALLBACK_MAPPING_KEY, KindOverride},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct settings subcommand.
pub fn execute(cmd: SettingsCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let effective = effective(&config)?;
            if output.format() == OutputFormat::Json {
                output.json(&effective)?;
            } else {
                let text = toml::to_string_pretty(&effective)
                    .with_cli_context(|| "Failed to serialise settings")?;
                output.content(&text)?;
            }
        }

        SettingsCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            if output.format() == OutputFormat::Json {
                output.json(&value)?;
            } else {
                output.content(&display(&value))?;
            }
        }

        SettingsCommands::Path => {
            output.content(&config.config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The merged settings in config-file shape.
fn effective(config: &AppConfig) -> CliResult<AppConfig> {
    let settings = config.settings()?;
    let mut effective = AppConfig::template();

    effective.namespace = Some(settings.namespace.clone());
    effective.directory = Some(settings.directory.clone());
    effective.header = Some(settings.header.clone());
    effective.project = config.project.clone();
    effective.placeholders = config.placeholders.clone();
    effective.output = config.output.clone();
    effective.declarations = settings
        .declarations
        .iter()
        .map(|(kind, current)| {
            (
                kind.as_str().to_string(),
                KindOverride {
                    namespace: Some(current.namespace.clone()),
                    postfix: Some(current.postfix.clone()),
                    directory: current.directory.clone(),
                },
            )
        })
        .collect();
    effective.mapping = settings
        .mapping
        .iter()
        .map(|(kind, mapping)| (kind.to_string(), mapping.clone()))
        .collect();
    effective.mapping.insert(
        FALLBACK_MAPPING_KEY.to_string(),
        settings.mapping.fallback().clone(),
    );

    Ok(effective)
}

/// Look up a dotted key in the effective settings.  Kind names match
/// case-insensitively (`declarations.jobhandler.postfix`).
fn lookup(config: &AppConfig, key: &str) -> CliResult<Value> {
    let tree = serde_json::to_value(effective(config)?).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise settings: {e}"),
        source: Some(Box::new(e)),
    })?;

    let unknown = || CliError::UnknownSettingsKey {
        key: key.to_string(),
    };

    let mut current = &tree;
    for segment in key.split('.') {
        let object = current.as_object().ok_or_else(unknown)?;
        current = object
            .get(segment)
            .or_else(|| {
                object
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(segment))
                    .map(|(_, v)| v)
            })
            .ok_or_else(unknown)?;
    }

    Ok(current.clone())
}

/// Strings bare, everything else as JSON.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
