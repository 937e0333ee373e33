//! PSR-12 style PHP renderer.

use std::fmt::{self, Write};

use scaffolder_core::{
    application::{ApplicationError, ports::SourceRenderer},
    domain::{Constant, Declaration, Method, Parameter, PhpValue, Property, php_string},
    error::ScaffolderResult,
};
use tracing::instrument;

const INDENT: &str = "    ";

/// Renders declarations as PHP source files.
///
/// Layout: `<?php`, header docblock, `declare(strict_types=1);`, namespace,
/// sorted imports, class docblock, then the class body with trait uses,
/// constants, properties and methods separated by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpRenderer;

impl PhpRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_declaration(&self, out: &mut String, decl: &Declaration) -> fmt::Result {
        write_preamble(out, decl.header())?;

        if !decl.namespace().is_empty() {
            writeln!(out, "namespace {};", decl.namespace())?;
            writeln!(out)?;
        }

        if !decl.imports().is_empty() {
            for import in decl.imports() {
                match &import.alias {
                    Some(alias) => writeln!(out, "use {} as {};", import.name, alias)?,
                    None => writeln!(out, "use {};", import.name)?,
                }
            }
            writeln!(out)?;
        }

        write_docblock(out, "", decl.comment())?;

        write!(out, "class {}", decl.name())?;
        if let Some(parent) = decl.parent() {
            write!(out, " extends {}", decl.type_reference(parent))?;
        }
        if !decl.interfaces().is_empty() {
            let interfaces: Vec<String> = decl
                .interfaces()
                .iter()
                .map(|i| decl.type_reference(i))
                .collect();
            write!(out, " implements {}", interfaces.join(", "))?;
        }
        writeln!(out)?;
        writeln!(out, "{{")?;

        let mut members: Vec<String> = Vec::new();
        if !decl.traits().is_empty() {
            let mut block = String::new();
            for name in decl.traits() {
                writeln!(block, "{INDENT}use {};", decl.type_reference(name))?;
            }
            members.push(block);
        }
        for constant in decl.constants() {
            members.push(constant_block(constant)?);
        }
        for property in decl.properties() {
            members.push(property_block(property)?);
        }
        for method in decl.methods() {
            members.push(method_block(method)?);
        }
        out.push_str(&members.join("\n"));

        writeln!(out, "}}")
    }
}

impl SourceRenderer for PhpRenderer {
    #[instrument(skip_all, fields(class = %declaration.fqcn()))]
    fn render(&self, declaration: &Declaration) -> ScaffolderResult<String> {
        let mut out = String::new();
        self.write_declaration(&mut out, declaration)
            .map_err(rendering_failed)?;
        Ok(out)
    }

    fn render_return_file(&self, header: &[String], value: &PhpValue) -> ScaffolderResult<String> {
        let mut out = String::new();
        write_preamble(&mut out, header)
            .and_then(|_| writeln!(out, "return {};", value_block(value, 0)))
            .map_err(rendering_failed)?;
        Ok(out)
    }
}

fn rendering_failed(e: fmt::Error) -> scaffolder_core::error::ScaffolderError {
    ApplicationError::RenderingFailed {
        reason: e.to_string(),
    }
    .into()
}

fn write_preamble(out: &mut String, header: &[String]) -> fmt::Result {
    writeln!(out, "<?php")?;
    writeln!(out)?;
    if !header.is_empty() {
        write_docblock(out, "", header)?;
        writeln!(out)?;
    }
    writeln!(out, "declare(strict_types=1);")?;
    writeln!(out)
}

fn write_docblock(out: &mut String, indent: &str, lines: &[String]) -> fmt::Result {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(out, "{indent}/**")?;
    for line in lines {
        if line.is_empty() {
            writeln!(out, "{indent} *")?;
        } else {
            writeln!(out, "{indent} * {}", line.replace("*/", "*\\/"))?;
        }
    }
    writeln!(out, "{indent} */")
}

fn constant_block(constant: &Constant) -> Result<String, fmt::Error> {
    let mut block = String::new();
    writeln!(
        block,
        "{INDENT}{} const {} = {};",
        constant.visibility,
        constant.name,
        value_block(&constant.value, 1)
    )?;
    Ok(block)
}

fn property_block(property: &Property) -> Result<String, fmt::Error> {
    let mut block = String::new();
    write_docblock(&mut block, INDENT, &property.comment)?;
    match &property.default {
        Some(value) => writeln!(
            block,
            "{INDENT}{} ${} = {};",
            property.visibility,
            property.name,
            value_block(value, 1)
        )?,
        None => writeln!(block, "{INDENT}{} ${};", property.visibility, property.name)?,
    }
    Ok(block)
}

fn method_block(method: &Method) -> Result<String, fmt::Error> {
    let mut block = String::new();
    write_docblock(&mut block, INDENT, &method.comment)?;

    let parameters: Vec<String> = method.parameters.iter().map(parameter).collect();
    write!(
        block,
        "{INDENT}{} function {}({})",
        method.visibility,
        method.name,
        parameters.join(", ")
    )?;
    if let Some(return_type) = &method.return_type {
        write!(block, ": {return_type}")?;
    }
    writeln!(block)?;
    writeln!(block, "{INDENT}{{")?;
    for line in &method.body {
        if line.is_empty() {
            writeln!(block)?;
        } else {
            writeln!(block, "{INDENT}{INDENT}{line}")?;
        }
    }
    writeln!(block, "{INDENT}}}")?;
    Ok(block)
}

fn parameter(parameter: &Parameter) -> String {
    let mut out = String::new();
    if let Some(hint) = &parameter.type_hint {
        out.push_str(hint);
        out.push(' ');
    }
    out.push('$');
    out.push_str(&parameter.name);
    out
}

/// Top-level value: non-empty arrays span multiple lines, map keys aligned.
fn value_block(value: &PhpValue, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    match value {
        PhpValue::List(items) if !items.is_empty() => {
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("{inner}{},", value_inline(item)))
                .collect();
            format!("[\n{}\n{indent}]", lines.join("\n"))
        }
        PhpValue::Map(items) if !items.is_empty() => {
            let keys: Vec<String> = items.iter().map(|(k, _)| php_string(k)).collect();
            let width = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);
            let lines: Vec<String> = keys
                .iter()
                .zip(items)
                .map(|(key, (_, v))| format!("{inner}{key:<width$} => {},", value_inline(v)))
                .collect();
            format!("[\n{}\n{indent}]", lines.join("\n"))
        }
        other => value_inline(other),
    }
}

fn value_inline(value: &PhpValue) -> String {
    match value {
        PhpValue::Str(s) => php_string(s),
        PhpValue::Raw(raw) => raw.clone(),
        PhpValue::List(items) => {
            let items: Vec<String> = items.iter().map(value_inline).collect();
            format!("[{}]", items.join(", "))
        }
        PhpValue::Map(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|(k, v)| format!("{} => {}", php_string(k), value_inline(v)))
                .collect();
            format!("[{}]", items.join(", "))
        }
    }
}
