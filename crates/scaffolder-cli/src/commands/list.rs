//! Implementation of the `scaffolder list` command.

use serde::Serialize;

use scaffolder_core::domain::{
    DeclarationKind, ScaffolderSettings, naming::join_namespace, registry,
};

use crate::{cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager};

/// One declaration kind as it resolves under the current settings.
#[derive(Debug, Serialize)]
struct KindRow {
    command: String,
    namespace: String,
    postfix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directory: Option<String>,
    fields: bool,
    description: &'static str,
}

fn rows(settings: &ScaffolderSettings) -> Vec<KindRow> {
    DeclarationKind::ALL
        .iter()
        .map(|kind| {
            let def = registry::kind_def(*kind);
            let current = settings.kind(*kind);
            KindRow {
                command: kind.command_name(),
                namespace: join_namespace([settings.namespace.as_str(), current.namespace.as_str()]),
                postfix: current.postfix,
                parent: def.parent,
                directory: current.directory.map(|d| d.display().to_string()),
                fields: kind.accepts_fields(),
                description: def.description,
            }
        })
        .collect()
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let rows = rows(&config.settings()?);

    match output.format() {
        OutputFormat::Json => output.json(&rows)?,
        OutputFormat::Plain => {
            for row in &rows {
                output.print(&format!("{}\t{}\t{}", row.command, row.namespace, row.postfix))?;
            }
        }
        _ => {
            output.header("Declaration kinds:")?;
            let width = rows.iter().map(|r| r.command.len()).max().unwrap_or(0);
            for row in &rows {
                output.print(&format!(
                    "  {:<width$}  {}",
                    row.command, row.description
                ))?;
                let postfix = if row.postfix.is_empty() {
                    "none"
                } else {
                    row.postfix.as_str()
                };
                output.detail(&format!(
                    "  {:<width$}  namespace {}, postfix {}",
                    "", row.namespace, postfix
                ))?;
            }
        }
    }

    Ok(())
}
