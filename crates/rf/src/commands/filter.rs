//! Filter command implementation.
//!
//! Prints the items that pass the filter tree, in input order.

use repo_filter_rs::Filter;
use tracing::debug;

use super::config::load_config;
use super::input::read_items;
use super::tree::build_filter;
use super::{CommandContext, Result};
use crate::cli::FilterArgs;
use crate::output::{format_filter_json, format_filter_lines};

/// Options for the filter command.
#[derive(Debug)]
pub struct FilterOptions<'a> {
    /// Inputs and filter options.
    pub filter: &'a FilterArgs,
    /// Print the rejected items instead.
    pub invert: bool,
    /// Print only the count.
    pub count: bool,
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the filter tree cannot be
/// built, or the items cannot be read.
pub fn execute(ctx: &CommandContext, opts: &FilterOptions<'_>) -> Result<()> {
    let config = load_config(ctx.config_path.as_deref())?;

    // Build first so a bad pattern fails before we block on stdin.
    let root = build_filter(opts.filter, &config)?;
    let items = read_items(&opts.filter.items, opts.filter.input.as_deref())?;

    let selected = select(&root, &items, opts.invert);
    debug!(
        total = items.len(),
        selected = selected.len(),
        invert = opts.invert,
        "filtered items"
    );

    if ctx.json_output {
        println!("{}", format_filter_json(&selected, items.len())?);
    } else if opts.count {
        println!("{}", selected.len());
    } else {
        print!("{}", format_filter_lines(&selected));
    }

    Ok(())
}

/// Returns the items that pass `filter`, or that fail it when `invert` is set.
pub fn select<'a, F>(filter: &F, items: &'a [String], invert: bool) -> Vec<&'a str>
where
    F: Filter<str> + ?Sized,
{
    items
        .iter()
        .map(String::as_str)
        .filter(|item| filter.passes(item) != invert)
        .collect()
}
