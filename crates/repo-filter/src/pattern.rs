//! Pattern filter: match strings against delimited regular expressions.
//!
//! Patterns are written in delimited form, `/expression/flags`, so flags
//! travel with the expression:
//!
//! - `/^web-/` - names starting with `web-`
//! - `#-api$#i` - names ending in `-api`, case-insensitive
//! - `{^(foo|bar)}` - bracket delimiters pair up
//!
//! Supported flags: `i`, `m`, `s`, `x`, `U`, `A` (anchor at the start of the
//! value), `D` (`$` matches only at the very end, not before a final newline)
//! and `u`, which is accepted without effect.
//!
//! Expressions use the `regex` crate's syntax. Look-around, backreferences,
//! possessive quantifiers, atomic groups and recursion are not supported and
//! are reported as invalid patterns.

use regex::{Regex, RegexSet};
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, FilterKind};

/// Passes strings matched by at least one of its patterns.
///
/// All patterns are compiled into a single [`RegexSet`] at construction, so a
/// malformed pattern is reported up front and evaluation is one pass over the
/// value no matter how many patterns there are.
///
/// # Example
///
/// ```
/// use repo_filter_rs::{Filter, PatternFilter};
///
/// let filter = PatternFilter::new(["/foo/", "/bar/"]).unwrap();
/// assert!(filter.passes("foobar"));
/// assert!(!filter.passes("baz"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternFilter {
    patterns: Vec<String>,
    matcher: RegexSet,
}

impl PatternFilter {
    /// Compiles a pattern filter.
    ///
    /// The patterns are kept verbatim and in order. An empty list is valid and
    /// yields a filter that rejects every value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`] for the first pattern that is
    /// not properly delimited, carries an unknown flag, or is not a valid
    /// regular expression.
    pub fn new<I, S>(patterns: I) -> FilterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        let sources = patterns
            .iter()
            .map(|pattern| {
                translate(pattern).map_err(|reason| FilterError::invalid_pattern(pattern, reason))
            })
            .collect::<FilterResult<Vec<_>>>()?;

        let matcher = RegexSet::new(&sources).map_err(|set_error| {
            // The set error does not say which member failed; find it.
            patterns
                .iter()
                .zip(&sources)
                .find_map(|(pattern, source)| {
                    Regex::new(source)
                        .err()
                        .map(|e| FilterError::invalid_pattern(pattern, e.to_string()))
                })
                .unwrap_or_else(|| {
                    FilterError::invalid_pattern(patterns.join(" "), set_error.to_string())
                })
        })?;

        debug!(patterns = patterns.len(), "compiled pattern filter");

        Ok(Self { patterns, matcher })
    }

    /// Returns the patterns as given at construction.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the filter has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Filter<str> for PatternFilter {
    fn passes(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    fn kind(&self) -> Option<FilterKind> {
        Some(FilterKind::PATTERN)
    }
}

/// Returns the closing delimiter for an opening one.
fn closing_delimiter(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

/// Translates a delimited pattern into `regex` syntax.
fn translate(pattern: &str) -> Result<String, String> {
    let trimmed = pattern.trim_start();
    let open = trimmed
        .chars()
        .next()
        .ok_or_else(|| "empty pattern".to_string())?;

    if open.is_alphanumeric() || open == '\\' {
        return Err("delimiter must not be alphanumeric or backslash".to_string());
    }

    let close = closing_delimiter(open);
    let rest = &trimmed[open.len_utf8()..];

    let mut depth = 0usize;
    let mut escaped = false;
    let mut end = None;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == close {
            if depth == 0 {
                end = Some(i);
                break;
            }
            depth -= 1;
        } else if c == open {
            // Only reachable for bracket delimiters.
            depth += 1;
        }
    }

    let end = end.ok_or_else(|| format!("no ending delimiter '{close}' found"))?;
    let body = &rest[..end];
    let modifiers = &rest[end + close.len_utf8()..];

    let mut flags = String::new();
    let mut anchored = false;
    let mut dollar_end_only = false;
    for modifier in modifiers.chars() {
        match modifier {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !flags.contains(modifier) {
                    flags.push(modifier);
                }
            }
            'A' => anchored = true,
            'D' => dollar_end_only = true,
            'u' | ' ' | '\n' | '\r' => {}
            other => return Err(format!("unknown modifier '{other}'")),
        }
    }

    let body = if dollar_end_only || flags.contains('m') {
        body.to_string()
    } else {
        dollar_before_final_newline(body)
    };

    let mut source = String::with_capacity(body.len() + flags.len() + 8);
    if !flags.is_empty() {
        source.push_str("(?");
        source.push_str(&flags);
        source.push(')');
    }

    if !anchored {
        source.push_str(&body);
        return Ok(source);
    }

    // Check the bare expression: the group below could balance a stray
    // parenthesis in the body.
    let mut bare = source.clone();
    bare.push_str(&body);
    Regex::new(&bare).map_err(|e| e.to_string())?;

    source.push_str(r"\A(?:");
    source.push_str(&body);
    if flags.contains('x') {
        // A trailing comment would otherwise swallow the closing paren.
        source.push('\n');
    }
    source.push(')');

    Ok(source)
}

/// Rewrites each unescaped `$` outside a character class so it also matches
/// before a trailing newline.
fn dollar_before_final_newline(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 8);
    let mut chars = body.chars();
    let mut class_depth = 0usize;
    let mut class_start = false;

    while let Some(c) = chars.next() {
        let opened = match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                false
            }
            '[' => {
                class_depth += 1;
                out.push(c);
                true
            }
            '^' if class_start => {
                out.push(c);
                true
            }
            ']' if class_depth > 0 && !class_start => {
                class_depth -= 1;
                out.push(c);
                false
            }
            '$' if class_depth == 0 => {
                out.push_str(r"(?:\n?\z)");
                false
            }
            other => {
                out.push(other);
                false
            }
        };
        class_start = opened;
    }

    out
}
