use core::fmt::{Debug, Display};

/// Integer types accepted as sizes and positions.
///
/// Signed types are accepted so that a negative argument is reported as an
/// error rather than being rejected by the type checker at the call site.
pub trait Index: Copy + Debug + Display + Sized + 'static {
    /// Convert to `usize`, or `None` when the value is negative or too large.
    fn try_to_usize(self) -> Option<usize>;
}

macro_rules! impl_index {
    ($($ty:ty),+) => {
        $(
            impl Index for $ty {
                #[inline]
                fn try_to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )+
    };
}

impl_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
