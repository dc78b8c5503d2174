//! Filter sets: combine filters with a logical operator.
//!
//! A [`FilterSet`] holds leaves and nested sets and evaluates them with AND,
//! OR or XOR. Sets also guard against mixing filters from unrelated families:
//! the first member with a determinable [`FilterKind`] fixes the set's kind,
//! and later members must match it.
//!
//! # Example
//!
//! ```
//! use repo_filter_rs::{Filter, FilterSet, Operator, PatternFilter};
//!
//! let mut set = FilterSet::new(Operator::And);
//! set.add_filter(PatternFilter::new(["/^a/"]).unwrap()).unwrap();
//! set.add_filter(PatternFilter::new(["/z$/"]).unwrap()).unwrap();
//!
//! assert!(set.passes("az"));
//! assert!(!set.passes("ab"));
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, FilterKind};

/// Logical operator of a [`FilterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Every member must pass.
    #[default]
    And,
    /// At least one member must pass.
    Or,
    /// Exactly one of two members must pass.
    Xor,
}

impl Operator {
    /// Returns the operator name in upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            "xor" => Ok(Operator::Xor),
            _ => Err(FilterError::unknown_operator(s)),
        }
    }
}

/// A composite filter combining members with an [`Operator`].
///
/// Members are evaluated in insertion order. AND stops at the first failing
/// member and OR at the first passing one. An empty set passes every value
/// under any operator.
pub struct FilterSet<V: ?Sized> {
    operator: Operator,
    filters: Vec<Box<dyn Filter<V>>>,
    base_kind: Option<FilterKind>,
}

impl<V: ?Sized> FilterSet<V> {
    /// Maximum number of members in an XOR set.
    pub const XOR_CAPACITY: usize = 2;

    /// Creates an empty set.
    pub fn new(operator: Operator) -> Self {
        Self {
            operator,
            filters: Vec::new(),
            base_kind: None,
        }
    }

    /// Creates an empty AND set.
    pub fn and() -> Self {
        Self::new(Operator::And)
    }

    /// Creates an empty OR set.
    pub fn or() -> Self {
        Self::new(Operator::Or)
    }

    /// Creates an empty XOR set.
    pub fn xor() -> Self {
        Self::new(Operator::Xor)
    }

    /// Returns the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the kind shared by the members, if one has been established.
    pub fn base_kind(&self) -> Option<FilterKind> {
        self.base_kind
    }

    /// Returns true if no filters have been added.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Adds a filter to the set.
    ///
    /// If the set has no kind yet, the filter's kind becomes the set's kind
    /// and is handed down to nested sets that lack one. Filters whose kind
    /// cannot be determined are always accepted.
    ///
    /// # Errors
    ///
    /// - [`FilterError::XorCapacity`] if this is an XOR set that already has
    ///   two members.
    /// - [`FilterError::IncompatibleFilter`] if the filter's kind differs from
    ///   the set's.
    ///
    /// A rejected filter is not added.
    pub fn add_filter<F>(&mut self, filter: F) -> FilterResult<()>
    where
        F: Filter<V> + 'static,
    {
        if self.operator == Operator::Xor && self.filters.len() == Self::XOR_CAPACITY {
            debug!("rejected filter: XOR set is full");
            return Err(FilterError::XorCapacity);
        }

        match (self.base_kind, filter.kind()) {
            (None, Some(kind)) => self.establish_kind(kind),
            (Some(expected), Some(found)) if expected != found => {
                debug!(%expected, %found, "rejected incompatible filter");
                return Err(FilterError::incompatible(expected, found));
            }
            _ => {}
        }

        self.filters.push(Box::new(filter));
        Ok(())
    }

    /// Adds filters in order, stopping at the first failure.
    ///
    /// Filters added before the failing one stay in the set.
    pub fn add_filters<I>(&mut self, filters: I) -> FilterResult<()>
    where
        I: IntoIterator,
        I::Item: Filter<V> + 'static,
    {
        for filter in filters {
            self.add_filter(filter)?;
        }
        Ok(())
    }

    fn establish_kind(&mut self, kind: FilterKind) {
        debug!(%kind, operator = %self.operator, "filter set kind established");
        self.base_kind = Some(kind);
        for filter in &mut self.filters {
            filter.adopt_kind(kind);
        }
    }

    fn passes_and(&self, value: &V) -> bool {
        self.filters.iter().all(|filter| filter.passes(value))
    }

    fn passes_or(&self, value: &V) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.passes(value))
    }

    fn passes_xor(&self, value: &V) -> bool {
        match self.filters.as_slice() {
            [first, last] => first.passes(value) != last.passes(value),
            _ => {
                trace!(members = self.filters.len(), "XOR set falls back to OR");
                self.passes_or(value)
            }
        }
    }
}

impl<V: ?Sized> Default for FilterSet<V> {
    fn default() -> Self {
        Self::new(Operator::default())
    }
}

impl<V: ?Sized> fmt::Debug for FilterSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("operator", &self.operator)
            .field("base_kind", &self.base_kind)
            .field("len", &self.filters.len())
            .finish()
    }
}

impl<V: ?Sized> Filter<V> for FilterSet<V> {
    fn passes(&self, value: &V) -> bool {
        match self.operator {
            Operator::And => self.passes_and(value),
            Operator::Or => self.passes_or(value),
            Operator::Xor => self.passes_xor(value),
        }
    }

    fn kind(&self) -> Option<FilterKind> {
        self.base_kind
    }

    fn adopt_kind(&mut self, kind: FilterKind) {
        if self.base_kind.is_none() {
            debug!(%kind, "nested filter set inherits kind");
            self.establish_kind(kind);
        }
    }
}
