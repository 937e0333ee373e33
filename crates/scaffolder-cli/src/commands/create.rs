//! Implementation of the `scaffolder create:*` commands.
//!
//! Every handler follows the same sequence:
//! 1. Parse `--field` values; a malformed one aborts before anything is written
//! 2. Draft the declaration (location, parent class, header, comment)
//! 3. Apply the kind-specific options through its builder and finish it
//! 4. Print the source (`--dry-run`) or write it via `ScaffoldService`

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use scaffolder_adapters::{LocalFilesystem, PhpRenderer, SystemClock};
use scaffolder_core::{
    application::{DeclarationFactory, Draft, ScaffoldService},
    domain::{
        BootloaderDeclaration, ClassLocation, CommandDeclaration, ConfigDeclaration,
        ControllerDeclaration, Declaration, DeclarationKind, Declare, EntityDeclaration,
        FieldSpec, FileRole, FilterDeclaration, JobHandlerDeclaration, MiddlewareDeclaration,
        MigrationDeclaration, PlannedFile, RecordDeclaration, RepositoryDeclaration,
    },
};

use crate::{
    cli::{
        CommandArgs, ControllerArgs, CreateArgs, EntityArgs, FilterArgs, MigrationArgs,
        OutputFormat, RecordArgs,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Factory and scaffold service wired to the working directory.
struct Generator {
    factory: DeclarationFactory,
    service: ScaffoldService,
}

impl Generator {
    fn new(config: &AppConfig) -> CliResult<Self> {
        let settings = config.settings()?;
        let service = ScaffoldService::new(
            settings.clone(),
            Box::new(PhpRenderer::new()),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemClock),
        );
        Ok(Self {
            factory: DeclarationFactory::new(settings),
            service,
        })
    }

    fn draft(&self, kind: DeclarationKind, args: &CreateArgs) -> CliResult<Draft> {
        let draft = self
            .factory
            .draft(kind, &args.name, args.comment.as_deref())?;
        debug!(class = %draft.location.fqcn(), "Declaration drafted");
        Ok(draft)
    }

    fn emit(
        &self,
        args: &CreateArgs,
        declaration: &Declaration,
        location: &ClassLocation,
        output: &OutputManager,
    ) -> CliResult<()> {
        if args.dry_run {
            let plan = self.service.preview(declaration, location)?;
            return match output.format() {
                OutputFormat::Json => {
                    let files = plan.files().map(PreviewFile::from).collect();
                    output.json(&Report::new(declaration, true, files))?;
                    Ok(())
                }
                _ => {
                    for file in plan.files() {
                        output.header(&format!("// {}", file.path.display()))?;
                        output.content(&file.content)?;
                    }
                    output.info("Dry run, nothing was written.")?;
                    Ok(())
                }
            };
        }

        let written = self.service.write(declaration, location, args.force)?;
        info!(class = %declaration.fqcn(), files = written.len(), "Declaration created");

        if output.format() == OutputFormat::Json {
            output.json(&Report::new(declaration, false, written))?;
            return Ok(());
        }

        for file in &written {
            let verb = if file.overwritten { "overwritten" } else { "written" };
            if file.role == FileRole::Class.as_str() {
                output.success(&format!(
                    "Declaration of '{}' has been successfully {verb} into '{}'.",
                    declaration.name(),
                    file.path.display()
                ))?;
            } else {
                output.success(&format!(
                    "Companion file has been successfully {verb} into '{}'.",
                    file.path.display()
                ))?;
            }
        }
        Ok(())
    }
}

/// JSON summary of one invocation.
#[derive(Debug, Serialize)]
struct Report<T: Serialize> {
    class: String,
    kind: DeclarationKind,
    dry_run: bool,
    files: Vec<T>,
}

impl<T: Serialize> Report<T> {
    fn new(declaration: &Declaration, dry_run: bool, files: Vec<T>) -> Self {
        Self {
            class: declaration.fqcn(),
            kind: declaration.kind(),
            dry_run,
            files,
        }
    }
}

#[derive(Debug, Serialize)]
struct PreviewFile<'a> {
    path: &'a Path,
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a PlannedFile> for PreviewFile<'a> {
    fn from(file: &'a PlannedFile) -> Self {
        Self {
            path: &file.path,
            role: file.role.as_str(),
            content: &file.content,
        }
    }
}

fn parse_fields(raw: &[String]) -> CliResult<Vec<FieldSpec>> {
    Ok(FieldSpec::parse_all(raw)?)
}

// ── handlers ──────────────────────────────────────────────────────────────────

#[instrument(skip_all, fields(name = %args.name))]
pub fn bootloader(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Bootloader, &args)?;
    let declaration = BootloaderDeclaration::new(draft.declaration).finish()?;
    generator.emit(&args, &declaration, &draft.location, &output)
}

/// Also writes `{config dir}/{snake_name}.php` returning an empty array.
#[instrument(skip_all, fields(name = %args.name))]
pub fn config(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Config, &args)?;
    let declaration =
        ConfigDeclaration::new(draft.declaration, draft.location.snake_name()).finish()?;
    generator.emit(&args, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.create.name, actions = args.actions.len()))]
pub fn controller(args: ControllerArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Controller, &args.create)?;

    let mut controller = ControllerDeclaration::new(draft.declaration);
    for action in &args.actions {
        controller.add_action(action)?;
    }
    let declaration = controller.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn middleware(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Middleware, &args)?;
    let declaration = MiddlewareDeclaration::new(draft.declaration).finish()?;
    generator.emit(&args, &declaration, &draft.location, &output)
}

/// The console alias defaults to the snake_case element name.
#[instrument(skip_all, fields(name = %args.create.name))]
pub fn command(args: CommandArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Command, &args.create)?;

    let alias = args
        .alias
        .clone()
        .unwrap_or_else(|| draft.location.snake_name());
    let mut command = CommandDeclaration::new(draft.declaration, &alias);
    if let Some(description) = &args.description {
        command.set_description(description);
    }
    let declaration = command.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn job_handler(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::JobHandler, &args)?;
    let declaration = JobHandlerDeclaration::new(draft.declaration).finish()?;
    generator.emit(&args, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.create.name, fields = args.fields.len()))]
pub fn migration(args: MigrationArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fields = parse_fields(&args.fields)?;
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Migration, &args.create)?;

    let mut migration = MigrationDeclaration::new(draft.declaration);
    migration.set_table(args.table.as_deref());
    for field in fields {
        migration.declare_field(field)?;
    }
    let declaration = migration.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.create.name, fields = args.fields.len()))]
pub fn filter(args: FilterArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fields = parse_fields(&args.fields)?;
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Filter, &args.create)?;

    let mut filter = FilterDeclaration::new(draft.declaration, generator.factory.mapping());
    for field in fields {
        filter.declare_field(field)?;
    }
    let declaration = filter.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.create.name, fields = args.fields.len()))]
pub fn entity(args: EntityArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fields = parse_fields(&args.fields)?;
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Entity, &args.create)?;

    let mut entity = EntityDeclaration::new(draft.declaration);
    entity.set_role(args.role.as_deref());
    entity.set_mapper(args.mapper.as_deref());
    entity.set_repository(args.repository.as_deref());
    entity.set_table(args.table.as_deref());
    entity.set_database(args.database.as_deref());
    entity.set_inflection(args.inflection.map(Into::into));
    entity.set_accessibility(args.accessibility.into());
    for field in fields {
        entity.declare_field(field)?;
    }
    let declaration = entity.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn repository(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Repository, &args)?;
    let declaration = RepositoryDeclaration::new(draft.declaration).finish()?;
    generator.emit(&args, &declaration, &draft.location, &output)
}

#[instrument(skip_all, fields(name = %args.create.name, fields = args.fields.len()))]
pub fn record(args: RecordArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fields = parse_fields(&args.fields)?;
    let generator = Generator::new(&config)?;
    let draft = generator.draft(DeclarationKind::Record, &args.create)?;

    let mut record = RecordDeclaration::new(draft.declaration, generator.factory.mapping());
    record.set_table(args.table.as_deref());
    record.set_database(args.database.as_deref());
    for field in fields {
        record.declare_field(field)?;
    }
    let declaration = record.finish()?;
    generator.emit(&args.create, &declaration, &draft.location, &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffolder_core::application::WrittenFile;

    #[test]
    fn malformed_field_rejected_before_drafting() {
        let err = parse_fields(&["id:primary".into(), "email".into()]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("name:type"));
    }

    #[test]
    fn preview_file_carries_role_name() {
        let file = PlannedFile {
            path: "app/config/mail.php".into(),
            content: "<?php".into(),
            role: FileRole::Companion,
        };
        let preview = PreviewFile::from(&file);
        assert_eq!(preview.role, "companion");
        assert_eq!(preview.path, Path::new("app/config/mail.php"));
    }

    #[test]
    fn report_serializes_kind_name() {
        let declaration = Declaration::new(DeclarationKind::JobHandler, "App\\Job", "MailJob");
        let report: Report<WrittenFile> = Report::new(&declaration, false, Vec::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "jobHandler");
        assert_eq!(json["class"], "App\\Job\\MailJob");
    }
}
