use core::alloc::Layout;

#[inline]
pub fn array_layout<T>(count: usize) -> Layout {
    match Layout::array::<T>(count) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

#[cold]
#[inline(never)]
pub fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
