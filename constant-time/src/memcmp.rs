//! memcmp

/// compares two slices of memory content and returns whether they are equal
///
/// ## Leaks
/// If the two slices have differents lengths, the function will return immediately. This
/// effectively leaks the information whether the slices have equal length or not. This is widely
/// considered safe.
///
/// The execution time of the function grows approx. linear with the length of the input and does
/// not depend on the position of the first differing byte.
///
/// ## Examples
///
/// ```rust
/// use natrium_constant_time::constant_time_equals;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(constant_time_equals(&a, &a));
/// assert!(!constant_time_equals(&a, &b));
/// assert!(!constant_time_equals(&a, &c));
/// assert!(constant_time_equals(&[], &[]));
/// ```
#[inline]
pub fn constant_time_equals(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && unsafe { memsec::memeq(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// Status-code flavour of [constant_time_equals]: `0` if both slices are equal, `-1` otherwise.
///
/// ```rust
/// use natrium_constant_time::memcmp;
/// assert_eq!(memcmp(b"abc", b"abc"), 0);
/// assert_eq!(memcmp(b"abc", b"abd"), -1);
/// assert_eq!(memcmp(b"abc", b"ab"), -1);
/// ```
#[inline]
pub fn memcmp(a: &[u8], b: &[u8]) -> i32 {
    (constant_time_equals(a, b) as i32) - 1
}
