use core::fmt;

mod dynarr;

pub use dynarr::*;

//--------------------------------------------------------------

/// Errors reported by fallible [`DynArr`] operations.
///
/// A failing operation never mutates the array.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DynArrError {
    /// An argument was rejected, e.g. a zero capacity.
    InvalidArgument(&'static str),
    /// An index was outside of the range an operation accepts.
    IndexOutOfRange {
        /// Index passed to the operation.
        index: usize,
        /// Exclusive upper bound the index was checked against.
        bound: usize,
    },
}

impl fmt::Display for DynArrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynArrError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            DynArrError::IndexOutOfRange { index, bound } => write!(f, "index (is {index}) should be < {bound}"),
        }
    }
}

impl std::error::Error for DynArrError {}

//--------------------------------------------------------------

/// A trait used to define a strategy to reserve additional memory for containers.
pub trait ReserveStrategy {
    /// Calculate the new capacity for a container.
    ///
    /// `cur_capacity` represents the current capacity of the container.
    ///
    /// `min_capacity` represents the minimum required capacity to be able to resize.
    ///
    /// Returns `Err(())` if the capacity were to overflow
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()>;
}

/// A reserve strategy that will try to either return double the current capacity, or the minimum required capacity, whichever is bigger.
pub struct DoubleOrMinReserveStrategy;

impl ReserveStrategy for DoubleOrMinReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        let double_cap = cur_capacity.checked_mul(2).ok_or(())?;
        let new_cap = if double_cap > min_capacity { double_cap } else { min_capacity };
        if new_cap <= isize::MAX as usize {
            Ok(new_cap)
        } else {
            Err(())
        }
    }
}

/// A reserve stategy that grows the capacity by 1.5, rounded down.
///
/// When that is not enough to fit `min_capacity` (e.g. growing from a capacity of 1), `min_capacity` is used instead.
pub struct ThreeHalvesReserveStrategy;

impl ReserveStrategy for ThreeHalvesReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        let grown = cur_capacity.checked_add(cur_capacity >> 1).ok_or(())?;
        let new_cap = grown.max(min_capacity);
        if new_cap <= isize::MAX as usize {
            Ok(new_cap)
        } else {
            Err(())
        }
    }
}
