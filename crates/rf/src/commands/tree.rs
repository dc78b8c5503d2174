//! Building the filter tree from command-line options and config presets.

use repo_filter_rs::{FilterSet, PatternFilter};
use strsim::levenshtein;
use tracing::debug;

use super::config::{Config, PresetConfig};
use super::{CommandError, Result};
use crate::cli::FilterArgs;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Builds the root filter set.
///
/// Each `--pattern` becomes its own pattern filter and each `--preset` a
/// nested set, all combined with the chosen operator. With neither, the root
/// is empty and passes everything.
pub fn build_filter(opts: &FilterArgs, config: &Config) -> Result<FilterSet<str>> {
    let operator = match opts.operator {
        Some(operator) => operator.into(),
        None => config.default_operator()?,
    };

    let mut root = FilterSet::new(operator);

    for pattern in &opts.patterns {
        root.add_filter(PatternFilter::new([pattern.as_str()])?)?;
    }

    for name in &opts.presets {
        let preset = find_preset(config, name)?;
        root.add_filter(preset.build()?)?;
    }

    debug!(
        %operator,
        patterns = opts.patterns.len(),
        presets = opts.presets.len(),
        "built filter tree"
    );

    Ok(root)
}

/// Looks up a preset by name, suggesting a close match when missing.
pub fn find_preset<'a>(config: &'a Config, name: &str) -> Result<&'a PresetConfig> {
    if let Some(preset) = config.presets.get(name) {
        return Ok(preset);
    }

    let suggestion = find_similar_name(name, config.presets.keys().map(String::as_str));
    Err(CommandError::Preset(format_not_found_error(name, suggestion.as_deref())))
}

/// Formats the "not found" error message, optionally including a suggestion.
fn format_not_found_error(name: &str, suggestion: Option<&str>) -> String {
    let base = format!("preset '{}' not found. Run 'rf presets' to list them.", name);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns `None` for exact matches and for candidates further than
/// [`MAX_SUGGESTION_DISTANCE`] away.
fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}
