//! Composable boolean filters.
//!
//! This crate builds predicate trees out of leaf filters and filter sets:
//!
//! - [`PatternFilter`] - passes strings matching any of a list of delimited
//!   regular expressions (`/^web-/`, `#-api$#i`, ...)
//! - [`FnFilter`] - wraps a closure, for callers' own value types
//! - [`FilterSet`] - combines filters with AND, OR or XOR
//!
//! Every filter belongs to a family ([`FilterKind`]). A set only accepts
//! members of one family, so a set of name patterns cannot silently pick up a
//! filter written for some other kind of value.
//!
//! Building a tree can fail ([`FilterError`]); evaluating one cannot.
//!
//! # Example
//!
//! ```
//! use repo_filter_rs::{Filter, FilterSet, Operator, PatternFilter};
//!
//! let mut services = FilterSet::new(Operator::Or);
//! services.add_filter(PatternFilter::new(["/-service$/"]).unwrap()).unwrap();
//! services.add_filter(PatternFilter::new(["/-api$/"]).unwrap()).unwrap();
//!
//! let mut root = FilterSet::new(Operator::And);
//! root.add_filter(PatternFilter::new(["/^billing-/"]).unwrap()).unwrap();
//! root.add_filter(services).unwrap();
//!
//! assert!(root.passes("billing-api"));
//! assert!(!root.passes("billing-docs"));
//! assert!(!root.passes("search-api"));
//! ```

mod error;
mod filter;
mod func;
mod pattern;
mod set;

pub use error::{FilterError, FilterResult};
pub use filter::{Filter, FilterKind};
pub use func::FnFilter;
pub use pattern::PatternFilter;
pub use set::{FilterSet, Operator};
