//! Error types for building filter trees.

use thiserror::Error;

use crate::filter::FilterKind;

/// A specialized Result type for filter construction.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building filters.
///
/// Evaluation never fails; every variant here is raised while a filter or a
/// filter set is being put together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// An XOR set already holds its two members.
    #[error("an XOR filter set can contain only 2 filters")]
    XorCapacity,

    /// The filter belongs to a different family than the set's members.
    #[error("incompatible filter: set holds {expected} filters, got a {found} filter")]
    IncompatibleFilter {
        /// The kind already established by the set.
        expected: FilterKind,
        /// The kind of the rejected filter.
        found: FilterKind,
    },

    /// A pattern expression could not be parsed or compiled.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An operator name that is not `and`, `or` or `xor`.
    #[error("unknown operator: {operator} (expected and, or, xor)")]
    UnknownOperator {
        /// The unrecognized operator.
        operator: String,
    },
}

impl FilterError {
    /// Creates an incompatible filter error.
    pub fn incompatible(expected: FilterKind, found: FilterKind) -> Self {
        FilterError::IncompatibleFilter { expected, found }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown operator error.
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        FilterError::UnknownOperator {
            operator: operator.into(),
        }
    }
}
