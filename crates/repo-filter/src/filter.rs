//! The filter contract shared by leaves and sets.

use std::fmt;

/// Family tag used to decide whether two filters may share a set.
///
/// Every leaf filter declares the family it belongs to. Filters of the same
/// family are compatible, so specializations of one family (say, pattern
/// filters built from different modifiers) mix freely while filters from
/// unrelated families are rejected by [`FilterSet`](crate::FilterSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterKind(&'static str);

impl FilterKind {
    /// The family of [`PatternFilter`](crate::PatternFilter).
    pub const PATTERN: FilterKind = FilterKind("pattern");

    /// Declares a filter family.
    pub const fn new(name: &'static str) -> Self {
        FilterKind(name)
    }

    /// Returns the family name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A boolean predicate over values of type `V`.
///
/// Filters are `Send + Sync` so a finished tree can be evaluated from several
/// threads at once.
pub trait Filter<V: ?Sized>: Send + Sync {
    /// Returns true if `value` passes the filter.
    fn passes(&self, value: &V) -> bool;

    /// The family this filter belongs to.
    ///
    /// `None` means the kind cannot be determined. Such filters are accepted
    /// by any set.
    fn kind(&self) -> Option<FilterKind>;

    /// Offers a kind inherited from an enclosing set.
    ///
    /// Leaves keep the family they declared; sets without a kind of their own
    /// take it and pass it on to their members.
    fn adopt_kind(&mut self, _kind: FilterKind) {}
}

impl<V: ?Sized, F: Filter<V> + ?Sized> Filter<V> for Box<F> {
    fn passes(&self, value: &V) -> bool {
        (**self).passes(value)
    }

    fn kind(&self) -> Option<FilterKind> {
        (**self).kind()
    }

    fn adopt_kind(&mut self, kind: FilterKind) {
        (**self).adopt_kind(kind)
    }
}
