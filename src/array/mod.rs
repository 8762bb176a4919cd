//! The `DynamicArray` container.

use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::mem;
use core::ops;
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::error::{ArrayError, InsertionError};
use crate::index::Index;
use crate::storage::alloc::RawBuffer;
use crate::storage::utils::capacity_overflow;
use crate::storage::{Plain, ReleaseMode};

use self::insert::Inserter;

#[macro_use]
mod macros;

pub(crate) mod insert;

/// The growth increment used when none is given.
pub const DEFAULT_GROWTH: usize = 1;

#[cfg(feature = "zeroize")]
/// A `DynamicArray` which wipes every buffer it releases, including the
/// buffers abandoned when it grows or trims.
pub type ZeroizingArray<T> = DynamicArray<T, crate::storage::Zeroizing>;

#[inline]
/// Create a `DynamicArray<T>` holding `count` clones of `elem`, with a
/// capacity of exactly `count`.
pub fn from_elem<T: Clone, M: ReleaseMode>(elem: T, count: usize) -> DynamicArray<T, M> {
    let mut arr = DynamicArray::with_capacity(count, DEFAULT_GROWTH);
    let mut insert = unsafe { Inserter::new(arr.buffer.data_ptr_mut(), count, 0) };
    while !insert.full() {
        insert.push_clone(&elem);
    }
    let (_, size) = insert.complete();
    arr.size = size;
    arr
}

/// A resizable array whose capacity grows by a fixed, caller-chosen
/// increment and is trimmed back automatically as elements are removed.
///
/// The logical size is always at most the capacity, and the array holds
/// no allocation exactly when its capacity is zero.
///
/// Growth policy: when an `add` or `insert_at` finds the buffer full, the
/// buffer is reallocated to `size + growth` slots (`size + 1` when the
/// increment is zero). Removal policy: after `remove_at`, if
/// `size < capacity - growth`, capacity is reduced to exactly `size`. Callers
/// that repeatedly add and remove around that threshold will reallocate
/// on every operation; choose the increment accordingly.
///
/// The array is not synchronized. Slices and references obtained from it
/// are invalidated by any mutating call, which the borrow checker enforces.
///
/// # Examples
///
/// ```
/// use incr_vec::DynamicArray;
///
/// let mut arr = DynamicArray::<i32>::new(0, 4);
/// arr.add(1);
/// arr.add(2);
/// assert_eq!(arr.capacity(), 4);
/// arr.insert_at(0, 7).unwrap();
/// assert_eq!(arr, [7, 1, 2]);
/// ```
pub struct DynamicArray<T, M: ReleaseMode = Plain> {
    buffer: RawBuffer<T, M>,
    size: usize,
    growth: usize,
}

impl<T, M: ReleaseMode> DynamicArray<T, M> {
    /// Constructs a new, empty `DynamicArray` with the default growth increment.
    ///
    /// The array will not allocate until elements are added.
    pub const fn empty() -> Self {
        Self::with_growth(DEFAULT_GROWTH)
    }

    /// Constructs a new, empty `DynamicArray` with the given growth increment.
    pub const fn with_growth(growth: usize) -> Self {
        Self {
            buffer: RawBuffer::EMPTY,
            size: 0,
            growth,
        }
    }

    fn with_capacity(capacity: usize, growth: usize) -> Self {
        Self {
            buffer: RawBuffer::allocate(capacity),
            size: 0,
            growth,
        }
    }

    /// The number of elements currently held.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// The index of the last element, or `None` when the array is empty.
    #[inline]
    pub fn upper_bound(&self) -> Option<usize> {
        self.size.checked_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    pub fn growth_increment(&self) -> usize {
        self.growth
    }

    /// Change the growth increment without touching the buffer.
    #[inline]
    pub fn set_growth_increment(&mut self, growth: usize) {
        self.growth = growth;
    }

    /// Read-only access to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` unless `0 <= index < size`.
    pub fn get_at<I: Index>(&self, index: I) -> Result<&T, ArrayError> {
        let index = self.checked_index(index)?;
        Ok(unsafe { &*self.buffer.data_ptr().add(index) })
    }

    /// Mutable access to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` unless `0 <= index < size`.
    pub fn get_at_mut<I: Index>(&mut self, index: I) -> Result<&mut T, ArrayError> {
        let index = self.checked_index(index)?;
        Ok(unsafe { &mut *self.buffer.data_ptr_mut().add(index) })
    }

    /// Replace the element at `index`, dropping the previous value.
    ///
    /// Fails with `IndexOutOfRange` unless `0 <= index < size`, in which case
    /// `value` is dropped and the array is unchanged.
    pub fn set_at<I: Index>(&mut self, index: I, value: T) -> Result<(), ArrayError> {
        *self.get_at_mut(index)? = value;
        Ok(())
    }

    /// The initialized contents of the buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.data_ptr(), self.size) }
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.data_ptr_mut(), self.size) }
    }

    /// A raw pointer to the start of the buffer. Only the first `size()`
    /// elements may be read, and the pointer is invalidated by any
    /// operation that changes the capacity.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.data_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.data_ptr_mut()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Append `value`, growing by the growth increment when the buffer is full.
    pub fn add(&mut self, value: T) {
        if self.size == self.buffer.capacity() {
            self.grow();
        }
        unsafe { self.buffer.data_ptr_mut().add(self.size).write(value) };
        self.size += 1;
    }

    /// Insert `value` at `index`, shifting the following elements up by one.
    ///
    /// Any `index` in `0..=size` is accepted; inserting at `size` appends.
    /// On failure the value is handed back inside the error.
    pub fn insert_at<I: Index>(&mut self, index: I, value: T) -> Result<(), InsertionError<T>> {
        let Some(index) = index.try_to_usize().filter(|idx| *idx <= self.size) else {
            return Err(InsertionError::new(ArrayError::IndexOutOfRange, value));
        };
        if self.size == self.buffer.capacity() {
            self.grow();
        }
        let tail_count = self.size - index;
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            if tail_count > 0 {
                ptr::copy(head, head.add(1), tail_count);
            }
            head.write(value);
        }
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the following
    /// elements down by one.
    ///
    /// Afterwards, if `size < capacity - growth`, the capacity is trimmed to
    /// exactly `size`.
    pub fn remove_at<I: Index>(&mut self, index: I) -> Result<T, ArrayError> {
        let index = self.checked_index(index)?;
        let copy_count = self.size - index - 1;
        let result = unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let result = head.read();
            if copy_count > 0 {
                ptr::copy(head.add(1), head, copy_count);
            }
            result
        };
        self.size -= 1;
        if self.size.saturating_add(self.growth) < self.buffer.capacity() {
            self.free_extra();
        }
        Ok(result)
    }

    /// Append clones of every element of `other`, growing in a single step
    /// to exactly the required capacity when needed.
    pub fn append<N: ReleaseMode>(&mut self, other: &DynamicArray<T, N>)
    where
        T: Clone,
    {
        self.extend_from_slice(other.data());
    }

    /// Append clones of every element of `items`, growing in a single step
    /// to exactly the required capacity when needed.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        let Some(required) = self.size.checked_add(items.len()) else {
            capacity_overflow();
        };
        if required > self.buffer.capacity() {
            unsafe { self.buffer.reallocate(self.size, required) };
        }
        self.extend_within_capacity(items);
    }

    /// Reduce the capacity to exactly the current size.
    pub fn free_extra(&mut self) {
        if self.size < self.buffer.capacity() {
            unsafe { self.buffer.reallocate(self.size, self.size) };
        }
    }

    /// Drop every element and release the buffer.
    pub fn remove_all(&mut self) {
        self.truncate(0);
        self.buffer.release();
        debug_assert!(!self.buffer.is_allocated());
    }

    /// Take the contents of this array, leaving it empty with the same
    /// growth increment.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::with_growth(self.growth))
    }

    #[inline]
    fn checked_index<I: Index>(&self, index: I) -> Result<usize, ArrayError> {
        match index.try_to_usize() {
            Some(index) if index < self.size => Ok(index),
            _ => Err(ArrayError::IndexOutOfRange),
        }
    }

    fn grow(&mut self) {
        let Some(capacity) = self.size.checked_add(self.growth.max(1)) else {
            capacity_overflow();
        };
        unsafe { self.buffer.reallocate(self.size, capacity) };
    }

    fn truncate(&mut self, length: usize) {
        if length < self.size {
            let remove = self.size - length;
            self.size = length;
            unsafe {
                ptr::drop_in_place(slice::from_raw_parts_mut(
                    self.buffer.data_ptr_mut().add(length),
                    remove,
                ));
            }
        }
    }

    fn extend_within_capacity(&mut self, items: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.size + items.len() <= self.buffer.capacity());
        let mut insert = unsafe {
            Inserter::new(
                self.buffer.data_ptr_mut(),
                self.size + items.len(),
                self.size,
            )
        };
        insert.extend_from_slice(items);
        let (_, size) = insert.complete();
        self.size = size;
    }
}

impl<T: Default, M: ReleaseMode> DynamicArray<T, M> {
    /// Constructs an array of `initial_size` default-valued elements, with a
    /// capacity of exactly `initial_size`.
    ///
    /// Panics if `initial_size` is negative.
    pub fn new<I: Index>(initial_size: I, growth: usize) -> Self {
        match Self::try_new(initial_size, growth) {
            Ok(arr) => arr,
            Err(error) => error.panic(),
        }
    }

    /// Constructs an array of `initial_size` default-valued elements, with a
    /// capacity of exactly `initial_size`.
    ///
    /// Fails with `InvalidArgument` if `initial_size` is negative.
    pub fn try_new<I: Index>(initial_size: I, growth: usize) -> Result<Self, ArrayError> {
        let size = initial_size
            .try_to_usize()
            .ok_or(ArrayError::InvalidArgument)?;
        let mut arr = Self::with_capacity(size, growth);
        arr.fill_default(size);
        Ok(arr)
    }

    /// Panics if `new_size` is negative. See `try_resize`.
    pub fn resize<I: Index>(&mut self, new_size: I, growth: usize) {
        match self.try_resize(new_size, growth) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Set the size to `new_size` and store `growth` as the growth increment.
    ///
    /// - Growing past the capacity reallocates to exactly `new_size` slots.
    /// - Shrinking below the current size drops the excess elements and
    ///   reallocates to exactly `new_size` slots.
    /// - Otherwise the buffer is kept as it is.
    ///
    /// Newly exposed elements are default-valued. Fails with
    /// `InvalidArgument` if `new_size` is negative, leaving the array unchanged.
    pub fn try_resize<I: Index>(&mut self, new_size: I, growth: usize) -> Result<(), ArrayError> {
        let new_size = new_size
            .try_to_usize()
            .ok_or(ArrayError::InvalidArgument)?;
        self.growth = growth;
        if new_size > self.buffer.capacity() {
            unsafe { self.buffer.reallocate(self.size, new_size) };
        } else if new_size < self.size {
            self.truncate(new_size);
            unsafe { self.buffer.reallocate(new_size, new_size) };
        }
        self.fill_default(new_size);
        Ok(())
    }

    fn fill_default(&mut self, size: usize) {
        if size <= self.size {
            return;
        }
        debug_assert!(size <= self.buffer.capacity());
        let mut insert = unsafe { Inserter::new(self.buffer.data_ptr_mut(), size, self.size) };
        while !insert.full() {
            insert.push(T::default());
        }
        let (_, size) = insert.complete();
        self.size = size;
    }
}

impl<T, M: ReleaseMode> AsRef<[T]> for DynamicArray<T, M> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T, M: ReleaseMode> AsMut<[T]> for DynamicArray<T, M> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<T, M: ReleaseMode> Borrow<[T]> for DynamicArray<T, M> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.data()
    }
}

impl<T, M: ReleaseMode> BorrowMut<[T]> for DynamicArray<T, M> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

/// Clones preserve the spare capacity and growth increment of the source,
/// not only its contents.
impl<T: Clone, M: ReleaseMode> Clone for DynamicArray<T, M> {
    fn clone(&self) -> Self {
        let mut inst = Self::with_capacity(self.capacity(), self.growth);
        inst.extend_within_capacity(self.data());
        inst
    }

    fn clone_from(&mut self, source: &Self) {
        self.remove_all();
        self.growth = source.growth;
        self.buffer = RawBuffer::allocate(source.capacity());
        self.extend_within_capacity(source.data());
    }
}

impl<T, M: ReleaseMode> ConstDefault for DynamicArray<T, M> {
    const DEFAULT: Self = Self::empty();
}

impl<T: fmt::Debug, M: ReleaseMode> fmt::Debug for DynamicArray<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data().fmt(f)
    }
}

impl<T, M: ReleaseMode> Default for DynamicArray<T, M> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, M: ReleaseMode> Drop for DynamicArray<T, M> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

/// Each element is added in turn, following the growth increment.
impl<T, M: ReleaseMode> Extend<T> for DynamicArray<T, M> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Clone + 'a, M: ReleaseMode> Extend<&'a T> for DynamicArray<T, M> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, M: ReleaseMode> FromIterator<T> for DynamicArray<T, M> {
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut arr = Self::with_capacity(min_cap, DEFAULT_GROWTH);
        arr.extend(iter);
        arr
    }
}

impl<T: Clone, M: ReleaseMode> From<&[T]> for DynamicArray<T, M> {
    fn from(data: &[T]) -> Self {
        let mut arr = Self::with_capacity(data.len(), DEFAULT_GROWTH);
        arr.extend_within_capacity(data);
        arr
    }
}

impl<T, M: ReleaseMode, const N: usize> From<[T; N]> for DynamicArray<T, M> {
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl<T, M: ReleaseMode> From<alloc::vec::Vec<T>> for DynamicArray<T, M> {
    fn from(data: alloc::vec::Vec<T>) -> Self {
        Self::from_iter(data)
    }
}

/// Panics with `IndexOutOfRange` unless `index < size`.
impl<T, M: ReleaseMode> ops::Index<usize> for DynamicArray<T, M> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get_at(index) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }
}

/// Panics with `IndexOutOfRange` unless `index < size`.
impl<T, M: ReleaseMode> ops::IndexMut<usize> for DynamicArray<T, M> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_at_mut(index) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }
}

impl<'a, T, M: ReleaseMode> IntoIterator for &'a DynamicArray<T, M> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, M: ReleaseMode> IntoIterator for &'a mut DynamicArray<T, M> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T1, M1, T2, M2> PartialEq<DynamicArray<T2, M2>> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
    M2: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &DynamicArray<T2, M2>) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq, M: ReleaseMode> Eq for DynamicArray<T, M> {}

impl<T1, M1, T2> PartialEq<[T2]> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.data() == other
    }
}

impl<T1, M1, T2> PartialEq<&[T2]> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.data() == *other
    }
}

impl<T1, M1, T2, const N: usize> PartialEq<[T2; N]> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.data() == other
    }
}

impl<T1, M1, T2, const N: usize> PartialEq<&[T2; N]> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.data() == *other
    }
}

impl<T1, M1, T2> PartialEq<alloc::vec::Vec<T2>> for DynamicArray<T1, M1>
where
    T1: PartialEq<T2>,
    M1: ReleaseMode,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<T2>) -> bool {
        self.data() == other.as_slice()
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, M: ReleaseMode> zeroize::Zeroize for DynamicArray<T, M> {
    fn zeroize(&mut self) {
        for item in self.iter_mut() {
            item.zeroize();
        }
        self.remove_all();
    }
}

#[cfg(feature = "zeroize")]
impl<T> zeroize::ZeroizeOnDrop for DynamicArray<T, crate::storage::Zeroizing> {}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn array_grows_by_increment() {
        let mut arr = DynamicArray::<u32>::with_growth(3);
        let mut caps = [0usize; 7];
        for (idx, cap) in caps.iter_mut().enumerate() {
            arr.add(idx as u32);
            *cap = arr.capacity();
        }
        assert_eq!(caps, [3, 3, 3, 6, 6, 6, 9]);
    }

    #[test]
    fn array_zero_growth_is_exact() {
        let mut arr = DynamicArray::<u32>::with_growth(0);
        for idx in 0..4 {
            arr.add(idx);
            assert_eq!(arr.capacity(), idx as usize + 1);
        }
    }

    #[test]
    fn array_trims_after_remove() {
        let mut arr = DynamicArray::<u32>::new(0, 2);
        arr.extend([1, 2, 3, 4, 5]);
        assert_eq!(arr.capacity(), 6);
        arr.remove_at(0).unwrap();
        // 4 + 2 == 6: not below the threshold
        assert_eq!(arr.capacity(), 6);
        arr.remove_at(0).unwrap();
        assert_eq!(arr.capacity(), 3);
        assert_eq!(arr, [3, 4, 5]);
    }

    #[test]
    fn array_remove_all_releases() {
        let mut arr = DynamicArray::<u32>::new(4, 1);
        arr.remove_all();
        assert!(!arr.buffer.is_allocated());
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn array_drops_elements() {
        #[derive(Default)]
        struct Counted<'c>(Option<&'c Cell<usize>>);

        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                if let Some(c) = self.0 {
                    c.set(c.get() + 1);
                }
            }
        }

        let drops = Cell::new(0);
        let mut arr = DynamicArray::<Counted<'_>>::empty();
        for _ in 0..5 {
            arr.add(Counted(Some(&drops)));
        }
        drop(arr.remove_at(1).unwrap());
        assert_eq!(drops.get(), 1);
        arr.resize(2, 1);
        assert_eq!(drops.get(), 3);
        drop(arr);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn array_zero_sized() {
        let mut arr = DynamicArray::<()>::new(3, 2);
        arr.add(());
        assert_eq!(arr.size(), 4);
        assert_eq!(arr.capacity(), 5);
        arr.remove_all();
        assert!(!arr.buffer.is_allocated());
    }
}
