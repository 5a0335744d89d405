pub use crate::collections::{DynArr, DynArrError};
pub use crate::sort::{Comparator, NaturalOrder};
pub use crate::dynarr;
