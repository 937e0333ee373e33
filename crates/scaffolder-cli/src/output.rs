//! Terminal output for command results and status lines.
//!
//! Results (generated source, JSON summaries, completion scripts) are always
//! written. Status lines (`✓ written`, warnings, listings) respect `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

/// `<glyph> <msg>`, coloured by tone when `color` is set.
fn status_line(tone: Tone, msg: &str, color: bool) -> String {
    let glyph = tone.glyph();
    if !color {
        return format!("{glyph} {msg}");
    }
    match tone {
        Tone::Success => format!("{} {}", glyph.green().bold(), msg.green()),
        Tone::Warning => format!("{} {}", glyph.yellow().bold(), msg.yellow()),
        Tone::Info => format!("{} {}", glyph.blue().bold(), msg.blue()),
    }
}

/// `Auto` becomes `Human` on a terminal and `Plain` when piped.
fn resolve_format(requested: OutputFormat, stdout_is_terminal: bool) -> OutputFormat {
    match requested {
        OutputFormat::Auto if stdout_is_terminal => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}

/// Writes to stdout according to the global flags and `[output]` config.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            format: resolve_format(args.output_format, io::stdout().is_terminal()),
            quiet: args.quiet,
            color: !(args.no_color || config.output.no_color),
            term: Term::stdout(),
        }
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&status_line(tone, msg, self.color))
    }

    /// Unstyled line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    /// Section title, e.g. above the `list` table.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    /// Indented secondary line under a header row.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&format!("  {}", msg.dimmed()))
        } else {
            self.term.write_line(&format!("  {msg}"))
        }
    }

    /// Command result text, written verbatim with a trailing newline.
    pub fn content(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// Command result as pretty-printed JSON.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// The resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        }
    }

    #[test]
    fn plain_status_lines() {
        assert_eq!(status_line(Tone::Success, "written", false), "\u{2713} written");
        assert_eq!(status_line(Tone::Warning, "exists", false), "\u{26a0} exists");
        assert_eq!(status_line(Tone::Info, "dry run", false), "\u{2139} dry run");
    }

    #[test]
    fn coloured_status_keeps_message() {
        let line = status_line(Tone::Success, "written", true);
        assert!(line.contains("written"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn auto_format_follows_terminal() {
        assert_eq!(resolve_format(OutputFormat::Auto, true), OutputFormat::Human);
        assert_eq!(resolve_format(OutputFormat::Auto, false), OutputFormat::Plain);
        assert_eq!(resolve_format(OutputFormat::Json, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Human, false), OutputFormat::Human);
    }

    #[test]
    fn colour_disabled_by_flag_or_config() {
        let config = AppConfig::default();
        assert!(OutputManager::new(&global(false, false, OutputFormat::Plain), &config).supports_color());
        assert!(!OutputManager::new(&global(false, true, OutputFormat::Plain), &config).supports_color());

        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&global(false, false, OutputFormat::Plain), &config).supports_color());
    }

    #[test]
    fn results_written_when_quiet() {
        let out = OutputManager::new(&global(true, true, OutputFormat::Json), &AppConfig::default());
        assert!(out.json(&serde_json::json!({ "files": [] })).is_ok());
        assert!(out.content("<?php\n").is_ok());
        assert!(out.success("suppressed").is_ok());
    }
}
