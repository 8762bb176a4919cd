use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};
use core::slice;

use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc, handle_alloc_error};

use super::utils::array_layout;
use super::ReleaseMode;

/// An exclusively owned, untyped-length allocation of `capacity` slots.
///
/// The buffer never tracks which slots are initialized and never drops
/// elements; that is the responsibility of the owning container. It holds
/// no allocation exactly when its capacity is zero.
pub(crate) struct RawBuffer<T, M: ReleaseMode> {
    data: Option<NonNull<T>>,
    capacity: usize,
    _marker: PhantomData<(T, M)>,
}

impl<T, M: ReleaseMode> RawBuffer<T, M> {
    pub const EMPTY: Self = Self {
        data: None,
        capacity: 0,
        _marker: PhantomData,
    };

    pub fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::EMPTY;
        }
        Self {
            data: Some(alloc_slots::<T>(capacity)),
            capacity,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    #[inline]
    pub fn data_ptr(&self) -> *const T {
        match self.data {
            Some(data) => data.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        match self.data {
            Some(data) => data.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Move the first `length` slots into a new allocation of exactly
    /// `capacity` slots and release the previous allocation.
    ///
    /// # Safety
    /// The first `length` slots must be initialized, and `length` must not
    /// exceed either the current or the new capacity. Any initialized slots
    /// past `length` are leaked unless the caller has already dropped them.
    pub unsafe fn reallocate(&mut self, length: usize, capacity: usize) {
        debug_assert!(length <= self.capacity && length <= capacity);
        let mut next = Self::allocate(capacity);
        if length > 0 {
            ptr::copy_nonoverlapping(self.data_ptr(), next.data_ptr_mut(), length);
        }
        mem::swap(self, &mut next);
        // `next` now owns the previous allocation
        drop(next);
    }

    /// Return the allocation, if any, to the global allocator.
    pub fn release(&mut self) {
        if let Some(data) = self.data.take() {
            let layout = array_layout::<T>(self.capacity);
            if layout.size() > 0 {
                unsafe {
                    let bytes = slice::from_raw_parts_mut(
                        data.as_ptr().cast::<MaybeUninit<u8>>(),
                        layout.size(),
                    );
                    M::prepare_release(bytes);
                    raw_dealloc(data.as_ptr().cast(), layout);
                }
            }
        }
        self.capacity = 0;
    }
}

impl<T, M: ReleaseMode> Drop for RawBuffer<T, M> {
    #[inline]
    fn drop(&mut self) {
        self.release();
    }
}

// The buffer is uniquely owned, so thread safety follows the element type.
unsafe impl<T: Send, M: ReleaseMode> Send for RawBuffer<T, M> {}

unsafe impl<T: Sync, M: ReleaseMode> Sync for RawBuffer<T, M> {}

fn alloc_slots<T>(capacity: usize) -> NonNull<T> {
    let layout = array_layout::<T>(capacity);
    if layout.size() == 0 {
        return NonNull::dangling();
    }
    match NonNull::new(unsafe { raw_alloc(layout) }) {
        Some(data) => data.cast(),
        None => handle_alloc_error(layout),
    }
}
