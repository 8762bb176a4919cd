//! Error handling.

use core::fmt;

/// An enumeration of the failures signalled by `DynamicArray` operations.
///
/// A rejected call never modifies the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayError {
    /// A size argument was negative or not representable as `usize`
    InvalidArgument,
    /// An index fell outside the valid range for the operation
    IndexOutOfRange,
}

impl ArrayError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid size argument",
            Self::IndexOutOfRange => "Index out of range",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

/// An error raised by insertion when the position was rejected.
/// Includes the value that was to be inserted.
#[derive(Clone)]
pub struct InsertionError<T> {
    pub(crate) error: ArrayError,
    pub(crate) value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: ArrayError, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Insertion error"
    }

    /// Get a reference to the contained `ArrayError`
    pub fn error(&self) -> &ArrayError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {}", self.as_str(), self.error.as_str());
    }
}

impl<T> From<InsertionError<T>> for ArrayError {
    #[inline]
    fn from(err: InsertionError<T>) -> Self {
        err.error
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertionError<T> {}
