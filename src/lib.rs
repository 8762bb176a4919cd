//! Resizable arrays with a caller-controlled growth increment
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod array;

pub(crate) mod error;

pub(crate) mod index;

pub mod storage;

#[cfg(feature = "zeroize")]
pub use self::array::ZeroizingArray;
pub use {
    self::array::DynamicArray,
    self::error::{ArrayError, InsertionError},
    self::index::Index,
    self::storage::{Plain, ReleaseMode},
};
