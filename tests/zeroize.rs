#![cfg(feature = "zeroize")]

use core::cell::Cell;

use incr_vec::{DynamicArray, ZeroizingArray};
use zeroize::Zeroize;

struct Secret<'c> {
    value: u32,
    wiped: &'c Cell<usize>,
}

impl Zeroize for Secret<'_> {
    fn zeroize(&mut self) {
        self.value.zeroize();
        self.wiped.set(self.wiped.get() + 1);
    }
}

#[test]
fn zeroizing_array_operations() {
    let mut arr = ZeroizingArray::<u32>::with_growth(2);
    for value in 0..10 {
        arr.add(value);
    }
    arr.insert_at(0, 99).unwrap();
    assert_eq!(arr.remove_at(1), Ok(0));
    arr.free_extra();
    assert_eq!(arr.capacity(), arr.size());
    let copy = arr.clone();
    assert_eq!(copy, arr);
    assert_eq!(arr, [99, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn zeroize_clears_array() {
    let mut arr = ZeroizingArray::<u8>::new(16, 4);
    arr.zeroize();
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 0);

    let mut arr = DynamicArray::<u64>::from(&[1, 2, 3][..]);
    arr.zeroize();
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 0);
}

#[test]
fn zeroize_wipes_elements() {
    let wiped = Cell::new(0);
    let mut arr = DynamicArray::<Secret<'_>>::empty();
    for value in 1..=3 {
        arr.add(Secret {
            value,
            wiped: &wiped,
        });
    }
    assert_eq!(arr.get_at(1).map(|s| s.value), Ok(2));
    arr.zeroize();
    assert_eq!(wiped.get(), 3);
    assert!(arr.is_empty());
}
