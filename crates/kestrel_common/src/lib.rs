//! Containers and algorithms shared across the kestrel crates.
//!
//! - [`collections::DynArr`]: a growable array of slots with manual capacity management.
//! - [`sort`]: an in-place Hoare quicksort over a `DynArr`, driven by natural order or a [`sort::Comparator`].

#[cfg(any(feature = "alloc_logging", feature = "sort_logging"))]
pub(crate) const LOG_CAT : kestrel_logging::LogCategory = kestrel_logging::LogCategory::new("Common");

pub mod collections;
pub mod sort;
pub mod prelude;
