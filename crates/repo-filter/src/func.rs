//! Closure-backed leaf filters.

use std::fmt;

use crate::filter::{Filter, FilterKind};

/// A leaf filter that delegates to a closure.
///
/// This is how callers filter their own value types without the engine
/// knowing about them:
///
/// ```
/// use repo_filter_rs::{Filter, FilterKind, FnFilter};
///
/// struct Repo {
///     archived: bool,
/// }
///
/// const REPO: FilterKind = FilterKind::new("repo");
///
/// let active = FnFilter::new(REPO, |repo: &Repo| !repo.archived);
/// assert!(active.passes(&Repo { archived: false }));
/// ```
pub struct FnFilter<F> {
    kind: Option<FilterKind>,
    predicate: F,
}

impl<F> FnFilter<F> {
    /// Creates a filter belonging to the `kind` family.
    pub fn new(kind: FilterKind, predicate: F) -> Self {
        Self {
            kind: Some(kind),
            predicate,
        }
    }

    /// Creates a filter with no family.
    ///
    /// Untagged filters skip the compatibility check and can be added to any
    /// set.
    pub fn untagged(predicate: F) -> Self {
        Self {
            kind: None,
            predicate,
        }
    }
}

impl<V, F> Filter<V> for FnFilter<F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    fn passes(&self, value: &V) -> bool {
        (self.predicate)(value)
    }

    fn kind(&self) -> Option<FilterKind> {
        self.kind
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").field("kind", &self.kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_closure() {
        let even = FnFilter::new(FilterKind::new("number"), |n: &i32| n % 2 == 0);
        assert!(even.passes(&4));
        assert!(!even.passes(&3));
        assert_eq!(Filter::<i32>::kind(&even), Some(FilterKind::new("number")));
    }

    #[test]
    fn test_untagged_has_no_kind() {
        let any = FnFilter::untagged(|_: &str| true);
        assert_eq!(Filter::<str>::kind(&any), None);
    }
}
