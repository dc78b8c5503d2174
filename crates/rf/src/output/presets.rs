//! Preset output formatting.

use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::config::PresetConfig;

/// JSON output structure for the presets command.
#[derive(Serialize)]
pub struct PresetsListOutput<'a> {
    pub presets: Vec<PresetOutput<'a>>,
}

/// JSON output structure for a single preset.
#[derive(Serialize)]
pub struct PresetOutput<'a> {
    pub name: &'a str,
    pub operator: String,
    pub patterns: &'a [String],
}

/// Returns the operator shown for a preset.
///
/// Invalid operators are shown as written; they only fail when the preset is
/// used.
fn display_operator(preset: &PresetConfig) -> String {
    match preset.operator() {
        Ok(operator) => operator.to_string(),
        Err(_) => preset.operator.clone().unwrap_or_default(),
    }
}

/// Formats presets as JSON.
pub fn format_presets_json(
    presets: &BTreeMap<String, PresetConfig>,
) -> Result<String, serde_json::Error> {
    let output = PresetsListOutput {
        presets: presets
            .iter()
            .map(|(name, preset)| PresetOutput {
                name,
                operator: display_operator(preset),
                patterns: &preset.patterns,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats presets as a table.
pub fn format_presets_table(presets: &BTreeMap<String, PresetConfig>, use_colors: bool) -> String {
    if presets.is_empty() {
        return "No presets configured.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<20} {:<4} {}", "Name", "Op", "Patterns");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (name, preset) in presets {
        let line = format!(
            "{:<20} {:<4} {}",
            name,
            display_operator(preset),
            preset.patterns.join(" ")
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
