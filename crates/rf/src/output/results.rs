//! Filter and check result formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub matched: &'a [&'a str],
    pub total: usize,
    pub matched_count: usize,
}

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub results: Vec<CheckResultOutput<'a>>,
}

/// JSON output structure for a single checked item.
#[derive(Serialize)]
pub struct CheckResultOutput<'a> {
    pub value: &'a str,
    pub passes: bool,
}

/// Formats filtered items one per line.
pub fn format_filter_lines(matched: &[&str]) -> String {
    let mut output = String::new();
    for item in matched {
        output.push_str(item);
        output.push('\n');
    }
    output
}

/// Formats filtered items as JSON.
pub fn format_filter_json(matched: &[&str], total: usize) -> Result<String, serde_json::Error> {
    let output = FilterOutput {
        matched,
        total,
        matched_count: matched.len(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats check results as JSON.
pub fn format_check_json(results: &[(&str, bool)]) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        results: results
            .iter()
            .map(|(value, passes)| CheckResultOutput {
                value: *value,
                passes: *passes,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats check results as a table with a pass/fail marker per item.
pub fn format_check_table(results: &[(&str, bool)], use_colors: bool, summary: bool) -> String {
    if results.is_empty() {
        return "No items to check.\n".to_string();
    }

    let mut output = String::new();

    for (value, passes) in results {
        let marker = match (*passes, use_colors) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "✓".to_string(),
            (false, true) => "✗".red().to_string(),
            (false, false) => "✗".to_string(),
        };
        output.push_str(&format!("{} {}\n", marker, value));
    }

    if summary {
        let passed = results.iter().filter(|(_, passes)| *passes).count();
        let line = format!("{} of {} passed", passed, results.len());
        if use_colors {
            output.push_str(&format!("{}\n", line.dimmed()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}
