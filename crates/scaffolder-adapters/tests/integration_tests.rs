//! End-to-end scaffolding through the real adapters.

use std::path::Path;

use scaffolder_adapters::{FixedClock, LocalFilesystem, MemoryFilesystem, PhpRenderer};
use scaffolder_core::{domain::settings::PROJECT_NAME, prelude::*};
use tempfile::TempDir;

fn service_with(fs: impl Filesystem + 'static, settings: &ScaffolderSettings) -> ScaffoldService {
    ScaffoldService::new(
        settings.clone(),
        Box::new(PhpRenderer::new()),
        Box::new(fs),
        Box::new(FixedClock::parse("20240305.101500").unwrap()),
    )
}

#[test]
fn record_file_matches_expected_source() {
    let settings = ScaffolderSettings::default();
    let factory = DeclarationFactory::new(settings.clone());
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), &settings);

    let draft = factory.draft(DeclarationKind::Record, "user", None).unwrap();
    let mut record = RecordDeclaration::new(draft.declaration, factory.mapping());
    record.set_table(Some("users"));
    for field in FieldSpec::parse_all(["id:primary", "email:string", "age:int"]).unwrap() {
        record.declare_field(field).unwrap();
    }
    let declaration = record.finish().unwrap();
    service.write(&declaration, &draft.location, false).unwrap();

    let source = fs.get("app/src/Database/User.php").unwrap();
    let expected = "<?php

/**
 * {project-name}
 *
 * @author {author-name}
 */

declare(strict_types=1);

namespace App\\Database;

use Spiral\\ORM\\Record;

class User extends Record
{
    protected const TABLE = 'users';

    protected const SCHEMA = [
        'id'    => 'primary',
        'email' => 'string',
        'age'   => 'int',
    ];

    protected const SETTERS = [
        'id'    => 'strval',
        'email' => 'strval',
        'age'   => 'intval',
    ];

    protected const DEFAULTS = [];

    protected const INDEXES = [];
}
";
    assert_eq!(source, expected);
}

#[test]
fn filter_fields_follow_type_table() {
    let settings = ScaffolderSettings::default();
    let factory = DeclarationFactory::new(settings.clone());
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), &settings);

    let draft = factory.draft(DeclarationKind::Filter, "profile", None).unwrap();
    let mut filter = FilterDeclaration::new(draft.declaration, factory.mapping());
    for field in FieldSpec::parse_all(["count:int", "contact:email", "photo:image"]).unwrap() {
        filter.declare_field(field).unwrap();
    }
    service
        .write(&filter.finish().unwrap(), &draft.location, false)
        .unwrap();

    let source = fs.get("app/src/Filter/ProfileFilter.php").unwrap();
    assert!(source.contains("'count'   => 'data:count',"));
    assert!(source.contains("'photo'   => 'file:photo',"));
    assert!(source.contains("'count'   => ['notEmpty', 'integer'],"));
    assert!(source.contains("'contact' => ['notEmpty', 'string', 'email'],"));
    assert!(source.contains("'photo'   => ['image::uploaded', 'image::valid'],"));
    assert!(!source.contains("'photo'   => 'strval'"));
}

#[test]
fn header_placeholders_and_config_companion() {
    let mut settings = ScaffolderSettings::default();
    settings.set_placeholder(PROJECT_NAME, "Acme Shop");
    let factory = DeclarationFactory::new(settings.clone());
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), &settings);

    let draft = factory.draft(DeclarationKind::Config, "payments", None).unwrap();
    let declaration = ConfigDeclaration::new(draft.declaration, draft.location.snake_name())
        .finish()
        .unwrap();
    service.write(&declaration, &draft.location, false).unwrap();

    let class = fs.get("app/src/Config/PaymentsConfig.php").unwrap();
    assert!(class.contains(" * Acme Shop\n"));
    assert!(class.contains(" * @author {author-name}\n"));
    assert!(class.contains("public const CONFIG = 'payments';"));
    assert!(class.contains("class PaymentsConfig extends InjectableConfig"));

    let companion = fs.get("app/config/payments.php").unwrap();
    assert!(companion.ends_with("return [];\n"));
}

#[test]
fn local_filesystem_migration() {
    let dir = TempDir::new().unwrap();
    let settings = ScaffolderSettings::default();
    let factory = DeclarationFactory::new(settings.clone());
    let service = service_with(LocalFilesystem::with_root(dir.path()), &settings);

    let draft = factory
        .draft(DeclarationKind::Migration, "create_orders", None)
        .unwrap();
    let mut migration = MigrationDeclaration::new(draft.declaration);
    migration.set_table(Some("orders"));
    migration
        .declare_field(FieldSpec::parse("id:primary").unwrap())
        .unwrap();
    service
        .write(&migration.finish().unwrap(), &draft.location, false)
        .unwrap();

    let path = dir
        .path()
        .join("app/migrations/20240305.101500_0_0_default_create_orders.php");
    let source = std::fs::read_to_string(path).unwrap();
    assert!(source.contains("class CreateOrdersMigration extends Migration"));
    assert!(source.contains(
        "        $this->table('orders')\n            ->addColumn('id', 'primary')\n            ->create();\n"
    ));
}

#[test]
fn existing_file_untouched_without_force() {
    let settings = ScaffolderSettings::default();
    let factory = DeclarationFactory::new(settings.clone());
    let fs = MemoryFilesystem::new().with_file("app/src/Controller/HomeController.php", "original");
    let service = service_with(fs.clone(), &settings);

    let draft = factory.draft(DeclarationKind::Controller, "home", None).unwrap();
    let mut controller = ControllerDeclaration::new(draft.declaration);
    controller.add_action("index").unwrap();
    let declaration = controller.finish().unwrap();

    assert!(service.write(&declaration, &draft.location, false).is_err());
    assert_eq!(
        fs.get(Path::new("app/src/Controller/HomeController.php")).as_deref(),
        Some("original")
    );

    service.write(&declaration, &draft.location, true).unwrap();
    let source = fs.get("app/src/Controller/HomeController.php").unwrap();
    assert!(source.contains("    use PrototypeTrait;\n"));
    assert!(source.contains("    public function index()\n    {\n    }\n"));
}
