//! CLI command implementations.

pub mod bindings;
pub mod layout;
pub mod list;

use std::rc::Rc;

use anyhow::{Context, Result};
use shortcut_config::{Binding, ConfigManager, KeyboardLayout};
use shortcut_engine::ShortcutRegistry;

use crate::catalog::editor_actions;
use crate::error::CliError;
use crate::headless::Headless;

/// Registry holding the editor catalog with `manager`'s overrides applied.
pub(crate) fn load_registry(manager: ConfigManager) -> Result<ShortcutRegistry> {
    let mut registry = ShortcutRegistry::new(Rc::new(Headless), Rc::new(Headless));
    registry.register_all(editor_actions().context("Invalid built-in action catalog")?);
    registry.attach_config(manager);
    Ok(registry)
}

/// Save the attached config, surfacing any I/O failure.
///
/// The registry already saves after each change but only logs failures; the
/// CLI must report them through its exit code.
pub(crate) fn save(registry: &mut ShortcutRegistry) -> Result<()> {
    let Some(mut manager) = registry.detach_config() else {
        return Ok(());
    };
    manager
        .save()
        .with_context(|| format!("Failed to save binding file {}", manager.path().display()))
}

pub(crate) fn require_action(registry: &ShortcutRegistry, id: &str) -> Result<(), CliError> {
    match registry.action(id) {
        Some(_) => Ok(()),
        None => Err(CliError::UnknownAction(id.to_string())),
    }
}

pub(crate) fn parse_binding(input: &str) -> Result<Binding, CliError> {
    Binding::from_config_string(input).map_err(|source| CliError::InvalidBinding {
        input: input.to_string(),
        source,
    })
}

pub(crate) fn parse_layout(input: &str) -> Result<KeyboardLayout, CliError> {
    input
        .parse()
        .map_err(|_| CliError::InvalidLayout(input.to_string()))
}
