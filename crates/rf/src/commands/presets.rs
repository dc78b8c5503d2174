//! Presets command implementation.
//!
//! Lists the named pattern sets from the config file.

use super::config::load_config;
use super::{CommandContext, Result};
use crate::output::{format_presets_json, format_presets_table};

/// Executes the presets command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = load_config(ctx.config_path.as_deref())?;

    if ctx.json_output {
        println!("{}", format_presets_json(&config.presets)?);
    } else {
        let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);
        print!("{}", format_presets_table(&config.presets, use_colors));
    }

    Ok(())
}
