//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the write side of every `create:*` command:
//! 1. Plan the files for a finished declaration (render class + companions)
//! 2. Refuse to overwrite unless forced
//! 3. Write to the filesystem
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, SourceRenderer},
    },
    domain::{
        ClassLocation, Declaration, DeclarationKind, DomainValidator as validator, FilePlan,
        FileRole, PhpValue, ScaffolderSettings,
    },
    error::ScaffolderResult,
};

/// Summary of one written file, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub role: &'static str,
    pub overwritten: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    settings: ScaffolderSettings,
    renderer: Box<dyn SourceRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scaffolder_core::{application::ScaffoldService, domain::ScaffolderSettings};
    ///
    /// let service = ScaffoldService::new(
    ///     ScaffolderSettings::default(),
    ///     renderer,   // impl SourceRenderer
    ///     filesystem, // impl Filesystem
    ///     clock,      // impl Clock
    /// );
    /// ```
    pub fn new(
        settings: ScaffolderSettings,
        renderer: Box<dyn SourceRenderer>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            renderer,
            filesystem,
            clock,
        }
    }

    /// Render a finished declaration and every companion file.
    #[instrument(skip_all, fields(class = %declaration.fqcn()))]
    pub fn plan(
        &self,
        declaration: &Declaration,
        location: &ClassLocation,
    ) -> ScaffolderResult<FilePlan> {
        let source = self.renderer.render(declaration)?;
        let mut plan = FilePlan::new().with(
            self.class_path(declaration.kind(), location),
            source,
            FileRole::Class,
        );

        if declaration.kind() == DeclarationKind::Config {
            let directory = self
                .settings
                .companion_directory(DeclarationKind::Config)
                .unwrap_or_default();
            let content = self
                .renderer
                .render_return_file(declaration.header(), &PhpValue::empty_array())?;
            plan.add(
                directory.join(format!("{}.php", location.snake_name())),
                content,
                FileRole::Companion,
            );
        }

        validator::validate_file_plan(&plan)?;
        debug!(files = plan.len(), "Plan ready");
        Ok(plan)
    }

    /// Dry run: the plan that `write` would materialize.
    pub fn preview(
        &self,
        declaration: &Declaration,
        location: &ClassLocation,
    ) -> ScaffolderResult<FilePlan> {
        let plan = self.plan(declaration, location)?;
        info!(files = plan.len(), "Dry run, nothing written");
        Ok(plan)
    }

    /// Render and write a declaration.
    ///
    /// Nothing is written when any target exists and `force` is off.
    #[instrument(skip_all, fields(class = %declaration.fqcn(), force = force))]
    pub fn write(
        &self,
        declaration: &Declaration,
        location: &ClassLocation,
        force: bool,
    ) -> ScaffolderResult<Vec<WrittenFile>> {
        let plan = self.plan(declaration, location)?;

        let mut existing = Vec::new();
        for file in plan.files() {
            if self.filesystem.exists(&file.path) {
                if !force {
                    return Err(ApplicationError::FileExists {
                        path: file.path.clone(),
                    }
                    .into());
                }
                existing.push(file.path.clone());
            }
        }

        let mut written = Vec::with_capacity(plan.len());
        for file in plan.files() {
            if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&file.path, &file.content)?;
            debug!(path = %file.path.display(), bytes = file.size(), "File written");

            written.push(WrittenFile {
                path: file.path.clone(),
                bytes: file.size(),
                role: file.role.as_str(),
                overwritten: existing.contains(&file.path),
            });
        }

        info!(files = written.len(), "Declaration written");
        Ok(written)
    }

    fn class_path(&self, kind: DeclarationKind, location: &ClassLocation) -> PathBuf {
        match (kind, self.settings.companion_directory(DeclarationKind::Migration)) {
            (DeclarationKind::Migration, Some(directory)) => {
                directory.join(migration_file_name(&self.clock.migration_stamp(), location))
            }
            _ => self.settings.class_path(location.path.as_path()),
        }
    }
}

/// `{stamp}_0_0_default_{snake_name}.php`
pub fn migration_file_name(stamp: &str, location: &ClassLocation) -> String {
    format!("{stamp}_0_0_default_{}.php", location.snake_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::{
        application::ports::{MockClock, MockFilesystem, MockSourceRenderer},
        domain::naming::resolve_location,
        error::ScaffolderError,
    };

    fn location(kind: DeclarationKind, element: &str) -> ClassLocation {
        let settings = ScaffolderSettings::default().kind(kind);
        resolve_location(element, "App", &settings.namespace, &settings.postfix).unwrap()
    }

    fn renderer() -> MockSourceRenderer {
        let mut renderer = MockSourceRenderer::new();
        renderer
            .expect_render()
            .returning(|d| Ok(format!("<?php // {}", d.name())));
        renderer
            .expect_render_return_file()
            .returning(|_, _| Ok("<?php return [];".into()));
        renderer
    }

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_migration_stamp()
            .returning(|| "20240102.030405".into());
        clock
    }

    fn service(filesystem: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(
            ScaffolderSettings::default(),
            Box::new(renderer()),
            Box::new(filesystem),
            Box::new(clock()),
        )
    }

    #[test]
    fn writes_class_under_source_directory() {
        let loc = location(DeclarationKind::Controller, "home");
        let decl = Declaration::at(DeclarationKind::Controller, &loc);
        let expected = PathBuf::from("app/src/Controller/HomeController.php");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("app/src/Controller"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(move |path, content| path == expected.as_path() && content.contains("HomeController"))
            .times(1)
            .returning(|_, _| Ok(()));

        let written = service(fs).write(&decl, &loc, false).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].role, "class");
        assert!(!written[0].overwritten);
    }

    #[test]
    fn existing_file_refused_without_force() {
        let loc = location(DeclarationKind::Filter, "signup");
        let decl = Declaration::at(DeclarationKind::Filter, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let err = service(fs).write(&decl, &loc, false).unwrap_err();
        assert!(matches!(
            err,
            ScaffolderError::Application(ApplicationError::FileExists { .. })
        ));
    }

    #[test]
    fn force_overwrites() {
        let loc = location(DeclarationKind::Filter, "signup");
        let decl = Declaration::at(DeclarationKind::Filter, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let written = service(fs).write(&decl, &loc, true).unwrap();
        assert!(written[0].overwritten);
    }

    #[test]
    fn config_writes_companion_file() {
        let loc = location(DeclarationKind::Config, "mail_queue");
        let decl = Declaration::at(DeclarationKind::Config, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let written = service(fs).write(&decl, &loc, false).unwrap();
        let paths: Vec<_> = written.iter().map(|w| w.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("app/src/Config/MailQueueConfig.php"),
                PathBuf::from("app/config/mail_queue.php"),
            ]
        );
        assert_eq!(written[1].role, "companion");
    }

    #[test]
    fn companion_conflict_blocks_class_write() {
        let loc = location(DeclarationKind::Config, "app");
        let decl = Declaration::at(DeclarationKind::Config, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("app/config/app.php"));
        fs.expect_write_file().never();

        assert!(service(fs).write(&decl, &loc, false).is_err());
    }

    #[test]
    fn migration_file_name_uses_clock() {
        let loc = location(DeclarationKind::Migration, "create_users");
        let decl = Declaration::at(DeclarationKind::Migration, &loc);

        let plan = service(MockFilesystem::new()).preview(&decl, &loc).unwrap();
        assert_eq!(
            plan.class_file().map(|f| f.path.clone()),
            Some(PathBuf::from(
                "app/migrations/20240102.030405_0_0_default_create_users.php"
            ))
        );
    }

    #[test]
    fn preview_touches_nothing() {
        let loc = location(DeclarationKind::Bootloader, "app");
        let decl = Declaration::at(DeclarationKind::Bootloader, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_write_file().never();

        let plan = service(fs).preview(&decl, &loc).unwrap();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn write_errors_pass_through() {
        let loc = location(DeclarationKind::Controller, "home");
        let decl = Declaration::at(DeclarationKind::Controller, &loc);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        assert!(matches!(
            service(fs).write(&decl, &loc, false),
            Err(ScaffolderError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }
}
