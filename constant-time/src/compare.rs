//! Three-way comparison of byte slices holding little endian unsigned integers

use core::hint::black_box;

/// Compares two slices of memory containing arbitrary-length little endian unsigned integers
/// and returns an integer indicating the relationship between the slices.
///
/// The shorter slice is treated as if it was padded with zero bytes on the right (the most
/// significant end) to the length of the longer one, so slices of different lengths compare
/// by numeric value.
///
/// ## Returns
///
/// - -1 if a < b
/// - 0 if a = b
/// - 1 if a > b
///
/// ## Leaks
/// The lengths of both slices are considered public.
///
/// The execution time of the function grows approx. linear with the length of the longer
/// input. No branch depends on the content of the slices and every position is visited.
///
/// ## Tests
///
/// ```rust
/// use natrium_constant_time::compare;
/// assert_eq!(compare(&[], &[]),    0);
///
/// assert_eq!(compare(&[0], &[1]), -1);
/// assert_eq!(compare(&[0], &[0]), 0);
/// assert_eq!(compare(&[1], &[0]), 1);
///
/// assert_eq!(compare(&[0, 0], &[1, 0]), -1);
/// assert_eq!(compare(&[0, 0], &[0, 0]), 0);
/// assert_eq!(compare(&[1, 0], &[0, 0]), 1);
///
/// assert_eq!(compare(&[1, 0], &[0, 1]), -1);
/// assert_eq!(compare(&[0, 1], &[0, 0]), 1);
///
/// // Zero padding on the right does not change the value
/// assert_eq!(compare(&[5], &[5, 0, 0]), 0);
/// assert_eq!(compare(&[5], &[5, 0, 1]), -1);
/// ```
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    compare_len(a, b, a.len().max(b.len()))
}

/// Like [compare], but considers exactly the first `len` positions of both slices.
///
/// Positions past the end of either slice read as zero, so `len` may exceed the length of the
/// inputs without panicking.
///
/// ```rust
/// use natrium_constant_time::compare_len;
/// // Only the first byte is taken into account
/// assert_eq!(compare_len(&[1, 9], &[1, 2], 1), 0);
/// assert_eq!(compare_len(&[1, 9], &[1, 2], 2), 1);
/// assert_eq!(compare_len(&[], &[], 4), 0);
/// ```
#[inline]
pub fn compare_len(a: &[u8], b: &[u8], len: usize) -> i32 {
    let mut gt = 0i32;
    let mut eq = 1i32;
    for i in (0..len).rev() {
        let l = black_box(byte_at(a, i));
        let r = black_box(byte_at(b, i));
        gt |= ((r - l) >> 8) & eq;
        eq &= ((r ^ l) - 1) >> 8;
    }
    (gt + gt + eq) - 1
}

/// Reads a position as an `i32`; positions past the end read as zero. The branch depends on
/// the public length only.
#[inline(always)]
fn byte_at(v: &[u8], i: usize) -> i32 {
    v.get(i).copied().unwrap_or(0) as i32
}
