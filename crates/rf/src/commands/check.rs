//! Check command implementation.
//!
//! Shows every item with its pass/fail result.

use repo_filter_rs::Filter;

use super::config::load_config;
use super::input::read_items;
use super::tree::build_filter;
use super::{CommandContext, Result};
use crate::cli::FilterArgs;
use crate::output::{format_check_json, format_check_table};

/// Executes the check command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the filter tree cannot be
/// built, or the items cannot be read.
pub fn execute(ctx: &CommandContext, opts: &FilterArgs) -> Result<()> {
    let config = load_config(ctx.config_path.as_deref())?;
    let root = build_filter(opts, &config)?;
    let items = read_items(&opts.items, opts.input.as_deref())?;

    let results: Vec<(&str, bool)> = items
        .iter()
        .map(|item| (item.as_str(), root.passes(item)))
        .collect();

    if ctx.json_output {
        println!("{}", format_check_json(&results)?);
    } else {
        let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);
        print!("{}", format_check_table(&results, use_colors, !ctx.quiet));
    }

    Ok(())
}
