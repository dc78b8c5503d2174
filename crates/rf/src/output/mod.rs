//! Output formatting utilities for the rf CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by command:
//!
//! - [`results`] - Filter and check results
//! - [`presets`] - Configured presets

mod presets;
mod results;

pub use presets::{format_presets_json, format_presets_table};
pub use results::{format_check_json, format_check_table, format_filter_json, format_filter_lines};
