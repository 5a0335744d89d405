//! Kestrel: a growable slot array with manual capacity management, and an in-place Hoare quicksort over it.
//!
//! ```
//! use kestrel::prelude::*;
//!
//! let mut arr = dynarr!["hello", "world", "snow"];
//! arr.sort();
//! assert_eq!(arr, dynarr!["hello", "snow", "world"]);
//! ```

pub use kestrel_common as common;
pub use kestrel_logging as logging;

pub use kestrel_common::{collections, sort};

pub mod prelude {
    pub use kestrel_common::prelude::*;
}
