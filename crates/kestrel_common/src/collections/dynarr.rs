use core::{
    fmt, hash::{Hash, Hasher}, iter, marker::PhantomData, mem
};

use static_assertions::const_assert;

use crate::sort::{self, Comparator};
use super::{DynArrError, ReserveStrategy, ThreeHalvesReserveStrategy};


/// Capacity of a `DynArr` created without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 10;
const_assert!(DEFAULT_CAPACITY > 0);

/// A contiguous growable array of slots, also known as a dynamic array, or DynArr.
///
/// Every slot in the backing store either holds a value or is empty.
/// The array tracks its logical length separately from the physical capacity of the backing store.
///
/// # Examples
///
/// ```
/// # use kestrel_common::collections::DynArr;
/// let mut arr = DynArr::new();
/// arr.push(1);
/// arr.push(2);
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.get(0), Ok(Some(&1)));
///
/// arr.set(0, 7).unwrap();
/// assert_eq!(arr.get(0), Ok(Some(&7)));
/// ```
///
/// The [`dynarr!`] macro is provided for convenient initialization, the capacity will match the number of elements:
///
/// ```
/// # use kestrel_common::dynarr;
/// let arr = dynarr![3, 1, 2];
/// assert_eq!(arr.capacity(), 3);
/// ```
///
/// # Capacity and reallocation
///
/// The capacity of a dynamic array is the number of slots in its backing store.
/// Pushing or inserting into a full array reallocates the backing store, growing it according to the reserve strategy `R`.
/// The default strategy, [`ThreeHalvesReserveStrategy`], grows the capacity by 1.5 (rounded down), giving an amortized *O*(1) push.
///
/// A `DynArr` never shrinks itself. [`clear`] replaces the backing store with a fresh one of the same capacity,
/// so previously stored values are dropped immediately.
///
/// # Removal leaves gaps
///
/// [`remove_at`] and [`remove_value`] empty the slot of the removed value and decrement the length,
/// but they do *not* shift the following values to the left.
/// As a consequence, indices are not contiguous after a removal:
///
/// - the removed slot reads as empty,
/// - the value that was last in the array now sits at index `len()`, outside of the logical range,
///   and will be overwritten by the next push.
///
/// ```
/// # use kestrel_common::dynarr;
/// let mut arr = dynarr![1, 2, 3];
/// arr.remove_at(0).unwrap();
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.get(0), Ok(None));
/// assert_eq!(arr.get(2), Ok(Some(&3)));
///
/// arr.push(4);
/// assert_eq!(arr.get(2), Ok(Some(&4)));
/// ```
///
/// # Equality
///
/// Two arrays are equal when their complete backing stores are equal, including empty trailing slots.
/// Arrays holding the same values with different capacities are therefore *not* equal.
///
/// [`clear`]: DynArr::clear
/// [`remove_at`]: DynArr::remove_at
/// [`remove_value`]: DynArr::remove_value
/// [`dynarr!`]: crate::dynarr
pub struct DynArr<T, R: ReserveStrategy = ThreeHalvesReserveStrategy> {
    slots:    Box<[Option<T>]>,
    len:      usize,
    _phantom: PhantomData<R>,
}

impl<T> DynArr<T> {
    /// Constructs a new, empty `DynArr` with a capacity of [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_strategy()
    }

    /// Constructs a new, empty `DynArr` with exactly the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::InvalidArgument`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynArrError> {
        Self::with_capacity_and_strategy(capacity)
    }

    /// Constructs a `DynArr` with a capacity equal to the length of `seq`, and pushes every element of `seq` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::InvalidArgument`] if `seq` is empty, as this would require a capacity of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kestrel_common::collections::DynArr;
    /// let arr = DynArr::from_sequence(vec![2, 2, 1]).unwrap();
    /// assert_eq!(arr.len(), 3);
    /// assert_eq!(arr.capacity(), 3);
    /// ```
    pub fn from_sequence<I>(seq: I) -> Result<Self, DynArrError> where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>
    {
        Self::from_sequence_with_strategy(seq)
    }
}

impl<T, R: ReserveStrategy> DynArr<T, R> {
    /// Constructs a new, empty `DynArr` growing with reserve strategy `R`, with a capacity of [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new_with_strategy() -> Self {
        Self::with_slots(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `DynArr` growing with reserve strategy `R`, with exactly the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::InvalidArgument`] if `capacity` is 0.
    pub fn with_capacity_and_strategy(capacity: usize) -> Result<Self, DynArrError> {
        if capacity == 0 {
            return Err(DynArrError::InvalidArgument("capacity must be a positive integer"));
        }
        Ok(Self::with_slots(capacity))
    }

    /// Same as [`DynArr::from_sequence`], growing with reserve strategy `R`.
    pub fn from_sequence_with_strategy<I>(seq: I) -> Result<Self, DynArrError> where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>
    {
        let iter = seq.into_iter();
        let mut arr = Self::with_capacity_and_strategy(iter.len())?;
        for elem in iter {
            arr.push(elem);
        }
        Ok(arr)
    }

    fn with_slots(capacity: usize) -> Self {
        Self { slots: Self::alloc_slots(capacity), len: 0, _phantom: PhantomData }
    }

    fn alloc_slots(capacity: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Returns the total number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements in the dynamic array, also referred to as the 'length'.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dynamic array has a length of 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element to the back of the array.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` elements.
    ///
    /// # Time complexity
    ///
    /// Takes amortized *O*(1) time.
    /// If the array is full, *O*(*capacity*) time is taken to move the slots into a larger backing store.
    pub fn push(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow_one();
        }
        self.slots[len] = Some(value);
        self.len += 1;
    }

    /// Inserts an element at position `index`, shifting all slots in `[index, len)` one slot to the right.
    ///
    /// Inserting at `len()` is the same as a [`push`].
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index > len`, the array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kestrel_common::dynarr;
    /// let mut arr = dynarr![1, 2, 3];
    /// arr.insert(1, 4).unwrap();
    /// assert_eq!(arr.iter().flatten().copied().collect::<Vec<_>>(), [1, 4, 2, 3]);
    /// assert!(arr.insert(5, 5).is_err());
    /// ```
    ///
    /// # Time complexity
    ///
    /// Takes *O*(`len - index`) time.
    ///
    /// [`push`]: DynArr::push
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrError> {
        let len = self.len;
        if index > len {
            return Err(DynArrError::IndexOutOfRange { index, bound: len + 1 });
        }

        if index == len {
            self.push(value);
            return Ok(());
        }

        if len == self.capacity() {
            self.grow_one();
        }

        // Slot `len` is unused, rotating moves it to `index` and everything in between one slot over
        self.slots[index..=len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the value in the slot at `index`, or `None` if the slot is empty.
    ///
    /// Any slot in the backing store can be read, including those at or past `len()`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&T>, DynArrError> {
        match self.slots.get(index) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(DynArrError::IndexOutOfRange { index, bound: self.capacity() }),
        }
    }

    /// Returns a mutable reference to the value in the slot at `index`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= capacity`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, DynArrError> {
        let bound = self.capacity();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.as_mut()),
            None => Err(DynArrError::IndexOutOfRange { index, bound }),
        }
    }

    /// Overwrites the slot at `index` with `value`, returning the previous content of the slot.
    ///
    /// The length is not changed, even if the slot is outside of `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= capacity`.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, DynArrError> {
        let bound = self.capacity();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.replace(value)),
            None => Err(DynArrError::IndexOutOfRange { index, bound }),
        }
    }

    /// Empties the slot at `index` and decrements the length, returning the previous content of the slot.
    ///
    /// Slots after `index` are not moved, see [Removal leaves gaps](#removal-leaves-gaps).
    /// Removing an already empty slot still decrements the length.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrError::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<T>, DynArrError> {
        if index >= self.len {
            return Err(DynArrError::IndexOutOfRange { index, bound: self.len });
        }
        self.len -= 1;
        Ok(self.slots[index].take())
    }

    /// Clears the dynamic array, replacing the backing store by an empty one with the same capacity.
    pub fn clear(&mut self) {
        // Swap first, so the old values are dropped while `self` is already in a valid state
        let capacity = self.capacity();
        let old = mem::replace(&mut self.slots, Self::alloc_slots(capacity));
        self.len = 0;
        drop(old);
    }

    /// Sorts the logical slots `[0, len)` with the given comparator, see [`sort::sort_by`].
    pub fn sort_by<C: Comparator<T>>(&mut self, comparator: C) {
        sort::sort_by(self, comparator)
    }

    /// Returns an iterator over the logical slots `[0, len)`, yielding `None` for empty slots.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&T>> + '_ {
        self.slots[..self.len].iter().map(Option::as_ref)
    }

    /// Returns the complete backing store, including the slots past `len()`.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Logical slots `[0, len)`, as seen by the sorter.
    pub(crate) fn logical_slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.len]
    }

    #[cold]
    fn grow_one(&mut self) {
        #[cfg(feature = "alloc_logging")]
        let old_capacity = self.capacity();

        let new_capacity = match R::calculate(self.capacity(), self.len + 1) {
            Ok(capacity) => capacity,
            Err(()) => capacity_overflow(),
        };

        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();

        #[cfg(feature = "alloc_logging")]
        kestrel_logging::log_verbose!(crate::LOG_CAT, "DynArr grew from {} to {} slots", old_capacity, new_capacity);
    }
}

impl<T: PartialEq, R: ReserveStrategy> DynArr<T, R> {
    /// Removes the first value in `[0, len)` that is equal to `value`, see [`remove_at`].
    ///
    /// Returns the removed value, or `None` if no slot matched, in which case the array is left untouched.
    ///
    /// [`remove_at`]: DynArr::remove_at
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.slots[..self.len].iter().position(|slot| slot.as_ref() == Some(value))?;
        self.len -= 1;
        self.slots[index].take()
    }
}

impl<T: Ord, R: ReserveStrategy> DynArr<T, R> {
    /// Sorts the logical slots `[0, len)` in their natural order, see [`sort::sort`].
    pub fn sort(&mut self) {
        sort::sort(self)
    }
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T, R: ReserveStrategy> Default for DynArr<T, R> {
    /// Creates an empty `DynArr<T>` with a capacity of [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self::new_with_strategy()
    }
}

impl<T: Clone, R: ReserveStrategy> Clone for DynArr<T, R> {
    fn clone(&self) -> Self {
        Self { slots: self.slots.clone(), len: self.len, _phantom: PhantomData }
    }
}

impl<T, R: ReserveStrategy, const N: usize> From<[T; N]> for DynArr<T, R> {
    /// Creates a `DynArr` with a capacity of `N`, or [`DEFAULT_CAPACITY`] if the array is empty.
    fn from(arr: [T; N]) -> Self {
        let mut res = Self::with_slots(if N == 0 { DEFAULT_CAPACITY } else { N });
        for elem in arr {
            res.push(elem);
        }
        res
    }
}

impl<T: PartialEq, R0: ReserveStrategy, R1: ReserveStrategy> PartialEq<DynArr<T, R1>> for DynArr<T, R0> {
    fn eq(&self, other: &DynArr<T, R1>) -> bool {
        self.slots[..] == other.slots[..]
    }
}

impl<T: Eq, R: ReserveStrategy> Eq for DynArr<T, R> {}

impl<T: Hash, R: ReserveStrategy> Hash for DynArr<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&*self.slots, state)
    }
}

impl<T: fmt::Debug, R: ReserveStrategy> fmt::Debug for DynArr<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.slots, f)
    }
}

impl<T: fmt::Display, R: ReserveStrategy> fmt::Display for DynArr<T, R> {
    /// Renders every slot of the backing store, with `_` for empty slots, e.g. `[1, _, 3, _]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, slot) in self.slots.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => fmt::Display::fmt(value, f)?,
                None => f.write_str("_")?,
            }
        }
        f.write_str("]")
    }
}

/// Creates a [`DynArr`] containing the arguments, with a capacity equal to the number of arguments.
///
/// `dynarr![]` creates an empty array with the default capacity.
///
/// [`DynArr`]: crate::collections::DynArr
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::collections::DynArr::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::collections::DynArr::<_>::from([$($elem),+])
    };
}
