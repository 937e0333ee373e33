//! `scaffolder init`: write a default `scaffolder.toml`.

use std::path::Path;

use tracing::instrument;

use crate::{
    cli::InitArgs,
    config::{AppConfig, CONFIG_FILE_NAME},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create `scaffolder.toml` in the working directory with every default
/// spelled out.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    write_default(Path::new(CONFIG_FILE_NAME), args.force, &output)
}

fn write_default(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::template())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn quiet() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        write_default(&path, false, &quiet()).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.namespace.as_deref(), Some("App"));
        assert!(loaded.settings().is_ok());
    }

    #[test]
    fn existing_file_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "namespace = \"Mine\"\n").unwrap();

        write_default(&path, false, &quiet()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "namespace = \"Mine\"\n"
        );

        write_default(&path, true, &quiet()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[declarations.controller]"));
    }
}
