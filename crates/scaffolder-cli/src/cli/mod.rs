//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use scaffolder_core::domain::{Inflection, Visibility};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scaffolder",
    bin_name = "scaffolder",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Class scaffolding for Spiral-style PHP applications",
    long_about = "Scaffolder generates bootloaders, configs, controllers, middleware, \
                  console commands, job handlers, migrations, filters, entities, \
                  repositories and records from the command line.",
    after_help = "EXAMPLES:\n\
        \x20 scaffolder create:controller admin/user -a index -a edit\n\
        \x20 scaffolder create:record user -f id:primary -f email:string -t users\n\
        \x20 scaffolder create:filter signup -f email:email -f avatar:image\n\
        \x20 scaffolder create:migration create_users -t users -f id:primary --dry-run\n\
        \x20 scaffolder completions bash > /usr/share/bash-completion/completions/scaffolder",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        name = "create:bootloader",
        about = "Create bootloader declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:bootloader app\n\
            \x20 scaffolder create:bootloader mail/queue -c \"Mail queue bindings.\""
    )]
    CreateBootloader(CreateArgs),

    #[command(
        name = "create:config",
        about = "Create config declaration and its configuration file",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:config mail_queue   # also writes app/config/mail_queue.php"
    )]
    CreateConfig(CreateArgs),

    #[command(
        name = "create:controller",
        about = "Create controller declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:controller home -a index -a about"
    )]
    CreateController(ControllerArgs),

    #[command(name = "create:middleware", about = "Create middleware declaration")]
    CreateMiddleware(CreateArgs),

    #[command(
        name = "create:command",
        about = "Create command declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:command sync_users users:sync -d \"Synchronize users\""
    )]
    CreateCommand(CommandArgs),

    #[command(
        name = "create:jobHandler",
        alias = "create:job",
        about = "Create job handler declaration"
    )]
    CreateJobHandler(CreateArgs),

    #[command(
        name = "create:migration",
        about = "Create migration declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:migration create_users -t users -f id:primary -f name:string"
    )]
    CreateMigration(MigrationArgs),

    #[command(
        name = "create:filter",
        about = "Create filter declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:filter signup -f email:email -f age:int -f avatar:image"
    )]
    CreateFilter(FilterArgs),

    #[command(
        name = "create:entity",
        about = "Create annotated entity declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:entity user -f id:primary -f createdAt:datetime -i tableize\n\
            \x20 scaffolder create:entity post -r post -e App\\\\Repository\\\\PostRepository"
    )]
    CreateEntity(EntityArgs),

    #[command(name = "create:repository", about = "Create repository declaration")]
    CreateRepository(CreateArgs),

    #[command(
        name = "create:record",
        about = "Create record declaration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder create:record user -f id:primary -f email:string -t users --db default"
    )]
    CreateRecord(RecordArgs),

    /// List declaration kinds and where they are generated.
    #[command(
        visible_alias = "ls",
        about = "List declaration kinds",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder list\n\
            \x20 scaffolder list --output-format json"
    )]
    List,

    /// Write a default `scaffolder.toml`.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder init           # ./scaffolder.toml\n\
            \x20 scaffolder init --force   # overwrite it"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scaffolder completions bash > ~/.local/share/bash-completion/completions/scaffolder\n\
            \x20 scaffolder completions zsh  > ~/.zfunc/_scaffolder\n\
            \x20 scaffolder completions fish > ~/.config/fish/completions/scaffolder.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective settings.
    #[command(
        about = "Show effective settings",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scaffolder settings show\n\
            \x20 scaffolder settings get namespace\n\
            \x20 scaffolder settings get declarations.controller.postfix\n\
            \x20 scaffolder settings path"
    )]
    Settings(SettingsCommands),
}

// ── create:* ──────────────────────────────────────────────────────────────────

/// Arguments shared by every `create:*` command.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Element name; may contain sub-directories (`admin/user`).
    #[arg(value_name = "NAME", help = "Element name")]
    pub name: String,

    /// Class docblock text.
    #[arg(short = 'c', long = "comment", value_name = "TEXT", help = "Optional comment")]
    pub comment: Option<String>,

    /// Print the generated source instead of writing it.
    #[arg(long = "dry-run", help = "Print generated source without writing")]
    pub dry_run: bool,

    /// Overwrite files that already exist.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ControllerArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(
        short = 'a',
        long = "action",
        value_name = "ACTION",
        help = "Pre-create controller action (repeatable)"
    )]
    pub actions: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CommandArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    /// Console name; the snake_case element name when omitted.
    #[arg(value_name = "ALIAS", help = "Command alias")]
    pub alias: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Command description"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct MigrationArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(short = 't', long = "table", value_name = "TABLE", help = "Table to create")]
    pub table: Option<String>,

    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE",
        help = "Create field in a format \"name:type\" (repeatable)"
    )]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE",
        help = "Input field in a format \"name:type\" (repeatable)"
    )]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EntityArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE",
        help = "Add field in a format \"name:type\" (repeatable)"
    )]
    pub fields: Vec<String>,

    #[arg(short = 'r', long = "role", value_name = "ROLE", help = "Entity role")]
    pub role: Option<String>,

    #[arg(short = 'm', long = "mapper", value_name = "CLASS", help = "Mapper class name")]
    pub mapper: Option<String>,

    #[arg(
        short = 'e',
        long = "repository",
        value_name = "CLASS",
        help = "Repository class name"
    )]
    pub repository: Option<String>,

    #[arg(short = 't', long = "table", value_name = "TABLE", help = "Table name")]
    pub table: Option<String>,

    #[arg(short = 'd', long = "database", value_name = "DATABASE", help = "Database name")]
    pub database: Option<String>,

    #[arg(
        short = 'i',
        long = "inflection",
        value_enum,
        value_name = "INFLECTION",
        help = "Column name inflection"
    )]
    pub inflection: Option<InflectionArg>,

    #[arg(
        long = "accessibility",
        value_enum,
        default_value = "public",
        help = "Field property visibility"
    )]
    pub accessibility: Accessibility,
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE",
        help = "Add field in a format \"name:type\" (repeatable)"
    )]
    pub fields: Vec<String>,

    #[arg(short = 't', long = "table", value_name = "TABLE", help = "Table name")]
    pub table: Option<String>,

    #[arg(
        long = "database",
        visible_alias = "db",
        value_name = "DATABASE",
        help = "Database name"
    )]
    pub database: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scaffolder init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scaffolder completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── settings subcommands ──────────────────────────────────────────────────────

/// Subcommands for `scaffolder settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the merged settings as TOML.
    Show,
    /// Print the value of one settings key.
    Get {
        /// Dotted key path, e.g. `declarations.filter.namespace`.
        key: String,
    },
    /// Print the path of the configuration file in use.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Column naming strategy for `create:entity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InflectionArg {
    /// `createdAt` → `created_at`
    #[value(alias = "t")]
    Tableize,
    /// `created_at` → `createdAt`
    #[value(alias = "c")]
    Camelize,
}

impl From<InflectionArg> for Inflection {
    fn from(value: InflectionArg) -> Self {
        match value {
            InflectionArg::Tableize => Inflection::Tableize,
            InflectionArg::Camelize => Inflection::Camelize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

impl From<Accessibility> for Visibility {
    fn from(value: Accessibility) -> Self {
        match value {
            Accessibility::Public => Visibility::Public,
            Accessibility::Protected => Visibility::Protected,
            Accessibility::Private => Visibility::Private,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
