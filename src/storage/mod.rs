//! Backing storage for `DynamicArray`.

use core::mem::MaybeUninit;

pub(crate) mod alloc;

pub(crate) mod utils;

#[cfg(feature = "zeroize")]
mod zero;

#[cfg(feature = "zeroize")]
pub use self::zero::Zeroizing;

/// Controls what happens to the bytes of a buffer before it is returned
/// to the global allocator.
///
/// Every buffer owned by a `DynamicArray` passes through `prepare_release`
/// exactly once: when the container is dropped, when it reallocates, and
/// when it trims or releases its capacity.
pub trait ReleaseMode {
    /// Invoked with the raw contents of a buffer just before it is deallocated.
    /// Any elements it held have already been dropped or moved out.
    fn prepare_release(bytes: &mut [MaybeUninit<u8>]);
}

/// Release buffers without touching their contents.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Plain;

impl ReleaseMode for Plain {
    #[inline]
    fn prepare_release(_bytes: &mut [MaybeUninit<u8>]) {}
}
