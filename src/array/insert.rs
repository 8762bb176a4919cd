use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

/// Writes elements into the uninitialized tail of a buffer.
///
/// If the inserter is dropped before `complete` is called (for instance
/// while unwinding from a panic in `Clone` or `Default`), the elements it
/// wrote are dropped again so that the owning container never exposes them.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// # Safety
    /// `data` must be valid for `cap` slots and the first `len` slots must
    /// be initialized. No other access to the buffer may occur while the
    /// inserter is live.
    #[inline]
    pub unsafe fn new(data: *mut T, cap: usize, len: usize) -> Self {
        debug_assert!(len <= cap);
        Self {
            buf: unsafe { slice::from_raw_parts_mut(data.cast::<MaybeUninit<T>>(), cap) },
            start: len,
            end: len,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.buf[self.end].write(val.clone());
        self.end += 1;
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push_clone(item);
        }
    }

    #[inline]
    pub const fn full(&self) -> bool {
        self.end == self.buf.len()
    }

    /// Returns the number of elements written and the new initialized length.
    #[inline]
    pub fn complete(mut self) -> (usize, usize) {
        let count = self.end - self.start;
        self.start = self.end;
        (count, self.end)
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    struct Counted<'c>(&'c Cell<usize>);

    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn inserter_complete() {
        let mut buf = [MaybeUninit::<u32>::uninit(); 4];
        let mut ins = unsafe { Inserter::new(buf.as_mut_ptr().cast(), 4, 1) };
        ins.push(5);
        ins.extend_from_slice(&[6, 7]);
        assert!(ins.full());
        assert_eq!(ins.complete(), (3, 4));
    }

    #[test]
    fn inserter_drops_incomplete() {
        let drops = Cell::new(0);
        let mut buf: [MaybeUninit<Counted<'_>>; 3] = [
            MaybeUninit::uninit(),
            MaybeUninit::uninit(),
            MaybeUninit::uninit(),
        ];
        {
            let mut ins = unsafe { Inserter::new(buf.as_mut_ptr().cast(), 3, 0) };
            ins.push(Counted(&drops));
            ins.push(Counted(&drops));
        }
        assert_eq!(drops.get(), 2);
    }
}
