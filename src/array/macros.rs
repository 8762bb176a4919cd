/// Create a `DynamicArray` with the default growth increment.
///
/// ```
/// use incr_vec::{dynamic_array, DynamicArray};
///
/// let a: DynamicArray<u8> = dynamic_array![];
/// assert!(a.is_empty());
/// let b: DynamicArray<u8> = dynamic_array![7; 3];
/// assert_eq!(b, [7, 7, 7]);
/// let c: DynamicArray<u8> = dynamic_array![1, 2, 3];
/// assert_eq!(c.capacity(), 3);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => (
        $crate::array::DynamicArray::empty()
    );
    ($elem:expr; $n:expr) => (
        $crate::array::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::array::DynamicArray::from([$($x),+])
    );
}
