//! `shortcuts set`, `unbind`, `reset`, `reset-all`, and `conflicts`.

use anyhow::Result;
use shortcut_config::ConfigManager;

use super::{load_registry, parse_binding, require_action, save};
use crate::error::CliError;
use crate::formatters::{BindingRow, OutputFormat, get_formatter};

pub fn run_set(manager: ConfigManager, id: &str, input: &str, force: bool) -> Result<()> {
    let binding = parse_binding(input)?;
    let mut registry = load_registry(manager)?;
    require_action(&registry, id)?;

    let conflicts: Vec<String> = registry
        .find_conflicts(id, &binding)
        .iter()
        .map(|action| action.id().to_string())
        .collect();
    if !conflicts.is_empty() {
        if !force {
            return Err(CliError::Conflict {
                id: id.to_string(),
                binding: binding.display_string(),
                conflicts,
            }
            .into());
        }
        tracing::warn!(
            action_id = %id,
            binding = %binding,
            conflicts = ?conflicts,
            "Applying conflicting binding"
        );
    }

    registry.set_binding(id, Some(binding));
    save(&mut registry)?;
    println!("Bound {} to {}", id, binding.display_string());
    Ok(())
}

pub fn run_unbind(manager: ConfigManager, id: &str) -> Result<()> {
    let mut registry = load_registry(manager)?;
    require_action(&registry, id)?;

    registry.set_binding(id, None);
    save(&mut registry)?;
    println!("Unbound {}", id);
    Ok(())
}

pub fn run_reset(manager: ConfigManager, id: &str) -> Result<()> {
    let mut registry = load_registry(manager)?;
    require_action(&registry, id)?;

    if registry.reset_to_default(id) {
        save(&mut registry)?;
    }
    match registry.get_binding(id) {
        Some(binding) => println!("Reset {} to {}", id, binding.display_string()),
        None => println!("Reset {} (no default binding)", id),
    }
    Ok(())
}

pub fn run_reset_all(manager: ConfigManager) -> Result<()> {
    let mut registry = load_registry(manager)?;
    registry.reset_all_to_defaults();
    save(&mut registry)?;
    println!("Reset all bindings to defaults");
    Ok(())
}

pub fn run_conflicts(manager: ConfigManager, id: &str, input: &str, output: &str) -> Result<()> {
    let format = OutputFormat::parse(output)?;
    let binding = parse_binding(input)?;
    let registry = load_registry(manager)?;
    require_action(&registry, id)?;

    let rows: Vec<BindingRow> = registry
        .find_conflicts(id, &binding)
        .into_iter()
        .map(|action| BindingRow::from_action(&registry, action))
        .collect();

    if rows.is_empty() && format == OutputFormat::Table {
        println!("No conflicts for {} on {}", id, binding.display_string());
        return Ok(());
    }

    let formatted = get_formatter(format).format_bindings(registry.keyboard_layout(), &rows)?;
    println!("{}", formatted);
    Ok(())
}
