//! `shortcuts list`.

use anyhow::Result;
use shortcut_config::ConfigManager;

use super::{load_registry, parse_layout};
use crate::formatters::{BindingRow, OutputFormat, get_formatter};

pub fn run(mut manager: ConfigManager, layout: Option<&str>, output: &str) -> Result<()> {
    let format = OutputFormat::parse(output)?;

    // Viewing another layout only changes the in-memory copy; nothing is saved.
    if let Some(layout) = layout {
        manager.config_mut().keyboard_layout = parse_layout(layout)?;
    }

    let registry = load_registry(manager)?;
    let rows: Vec<BindingRow> = registry
        .actions()
        .map(|action| BindingRow::from_action(&registry, action))
        .collect();

    let formatted = get_formatter(format).format_bindings(registry.keyboard_layout(), &rows)?;
    println!("{}", formatted);
    Ok(())
}
