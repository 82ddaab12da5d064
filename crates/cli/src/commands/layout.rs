//! `shortcuts layout` and `shortcuts generate`.

use anyhow::Result;
use shortcut_config::ConfigManager;
use shortcut_engine::layout_default;

use super::{load_registry, parse_layout, save};

pub fn run(manager: ConfigManager, layout: Option<&str>) -> Result<()> {
    let Some(layout) = layout else {
        println!("{}", manager.config().keyboard_layout);
        return Ok(());
    };

    let layout = parse_layout(layout)?;
    let mut registry = load_registry(manager)?;
    registry.set_keyboard_layout(layout);
    save(&mut registry)?;
    println!("Keyboard layout set to {}", layout);
    Ok(())
}

pub fn run_generate(manager: ConfigManager) -> Result<()> {
    let mut registry = load_registry(manager)?;
    let added = registry.generate_complete_config(layout_default);
    save(&mut registry)?;
    println!("Added {} default binding(s)", added);
    Ok(())
}
