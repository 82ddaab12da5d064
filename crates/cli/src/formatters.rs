//! Output formatters for binding listings.
//!
//! Responsibilities:
//! - Convert registry state into printable rows.
//! - Render rows as tab-separated tables or pretty JSON.
//!
//! Does NOT handle:
//! - Writing to stdout (callers print the returned string).

use anyhow::Result;
use serde::Serialize;
use shortcut_config::KeyboardLayout;
use shortcut_engine::{Action, ShortcutRegistry};

use crate::error::CliError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, CliError> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// One action as shown by `list` and `conflicts`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BindingRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub scope: String,
    /// `None` when the action is unbound.
    pub binding: Option<String>,
    pub custom: bool,
}

impl BindingRow {
    pub fn from_action(registry: &ShortcutRegistry, action: &Action) -> Self {
        Self {
            id: action.id().to_string(),
            name: action.display_name().to_string(),
            category: action.category().to_string(),
            scope: action.scope().to_string(),
            binding: registry
                .get_binding(action.id())
                .map(|binding| binding.display_string()),
            custom: registry.has_custom_binding(action.id()),
        }
    }
}

#[derive(Serialize)]
struct ListingOutput<'a> {
    layout: Option<KeyboardLayout>,
    actions: &'a [BindingRow],
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_bindings(
        &self,
        layout: Option<KeyboardLayout>,
        rows: &[BindingRow],
    ) -> Result<String>;
}

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_bindings(
        &self,
        layout: Option<KeyboardLayout>,
        rows: &[BindingRow],
    ) -> Result<String> {
        if rows.is_empty() {
            return Ok("No actions found.".to_string());
        }

        let mut output = String::new();
        if let Some(layout) = layout {
            output.push_str(&format!("Layout: {layout}\n"));
        }
        output.push_str("ID\tCategory\tScope\tBinding\tCustom\n");
        for row in rows {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                row.id,
                row.category,
                row.scope,
                row.binding.as_deref().unwrap_or("(unbound)"),
                if row.custom { "*" } else { "" }
            ));
        }
        Ok(output)
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_bindings(
        &self,
        layout: Option<KeyboardLayout>,
        rows: &[BindingRow],
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ListingOutput {
            layout,
            actions: rows,
        })?)
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
