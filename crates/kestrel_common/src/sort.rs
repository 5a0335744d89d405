//! In-place quicksort over a [`DynArr`], using the Hoare partition scheme.
//!
//! Only the logical slots `[0, len)` are sorted.
//! Empty slots (left behind by removals) are ordered after every value.
//!
//! The sort is not stable, equal values may be reordered.
//! The pivot is the middle slot of every subrange, so the worst case is *O*(*n*²) comparisons, *O*(*n* log *n*) on average.
//!
//! A comparator that is not a total order results in an unspecified, but memory-safe, order.
//! Sorting always terminates and never accesses slots outside of the logical range.

use core::cmp::Ordering;

use crate::collections::{DynArr, ReserveStrategy};


/// Three-way comparison between two values.
///
/// Implemented for every `Fn(&T, &T) -> Ordering`, so closures and functions can be used directly.
pub trait Comparator<T: ?Sized> {
    /// Compare `lhs` with `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// Comparator using the natural order of `T`, i.e. its [`Ord`] implementation.
#[derive(Clone, Copy, Default, Debug)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Sort the logical slots of `arr` in the natural order of `T`.
///
/// # Examples
///
/// ```
/// # use kestrel_common::{dynarr, sort};
/// let mut arr = dynarr![2, 2, 1, 10, 8];
/// sort::sort(&mut arr);
/// assert_eq!(arr, dynarr![1, 2, 2, 8, 10]);
/// ```
pub fn sort<T: Ord, R: ReserveStrategy>(arr: &mut DynArr<T, R>) {
    sort_by(arr, NaturalOrder)
}

/// Sort the logical slots of `arr` using `comparator`.
///
/// # Examples
///
/// ```
/// # use kestrel_common::{dynarr, sort};
/// let mut arr = dynarr!["hello", "tom", "snow"];
/// sort::sort_by(&mut arr, |a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert_eq!(arr, dynarr!["tom", "snow", "hello"]);
/// ```
pub fn sort_by<T, R: ReserveStrategy, C: Comparator<T>>(arr: &mut DynArr<T, R>, comparator: C) {
    let slots = arr.logical_slots_mut();
    if slots.len() <= 1 {
        return;
    }

    #[cfg(feature = "sort_logging")]
    kestrel_logging::log_debug!(crate::LOG_CAT, sort_by::<T, R, C>, "sorting {} slots", slots.len());

    let end = slots.len() - 1;
    quicksort(slots, 0, end, &|lhs: &Option<T>, rhs: &Option<T>| compare_slots(&comparator, lhs, rhs));
}

/// Compare two slots, empty slots go last.
fn compare_slots<T, C: Comparator<T>>(comparator: &C, lhs: &Option<T>, rhs: &Option<T>) -> Ordering {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => comparator.compare(lhs, rhs),
        (Some(_), None)        => Ordering::Less,
        (None, Some(_))        => Ordering::Greater,
        (None, None)           => Ordering::Equal,
    }
}

/// Sort the inclusive range `[start, end]`.
///
/// Recurses into the smaller partition and loops over the larger one, so the stack depth stays logarithmic.
fn quicksort<T, F>(slots: &mut [T], mut start: usize, mut end: usize, cmp: &F) where
    F: Fn(&T, &T) -> Ordering
{
    while start < end {
        // `partition` returns a value in `(start, end + 1]`, the clamp only kicks in for inconsistent comparators
        let split = partition(slots, start, end, cmp).min(end);

        if split - start < end + 1 - split {
            quicksort(slots, start, split - 1, cmp);
            start = split;
        } else {
            quicksort(slots, split, end, cmp);
            end = split - 1;
        }
    }
}

/// Hoare partition of the inclusive range `[lo, hi]` around the value of the middle slot.
///
/// Returns the start of the right partition: every slot before it compares less or equal to the pivot,
/// every slot from it on compares greater or equal.
fn partition<T, F>(slots: &mut [T], lo: usize, hi: usize, cmp: &F) -> usize where
    F: Fn(&T, &T) -> Ordering
{
    // The pivot is tracked by position, so it keeps the same value when swapped around
    let mut pivot = lo + (hi - lo) / 2;
    let mut left = lo;
    let mut right = hi;

    loop {
        while left < hi && cmp(&slots[left], &slots[pivot]) == Ordering::Less {
            left += 1;
        }
        while right > lo && cmp(&slots[right], &slots[pivot]) == Ordering::Greater {
            right -= 1;
        }

        if left > right {
            break;
        }

        slots.swap(left, right);
        if pivot == left {
            pivot = right;
        } else if pivot == right {
            pivot = left;
        }

        left += 1;
        // `left` is past `lo` now, so stepping `right` below `lo` would end the loop anyway
        if right == lo {
            break;
        }
        right -= 1;

        if left > right {
            break;
        }
    }
    left
}
