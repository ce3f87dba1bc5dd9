//! Fixed length verification

use core::hint::black_box;

/// Checks whether the first `N` bytes of two slices are equal, in constant time.
///
/// The difference accumulator is seeded with `a.len() ^ b.len()` and with whether the inputs are
/// shorter than `N`, so a length mismatch or a short input makes the result `false` without a
/// separate branch. Every one of the `N` positions is then visited unconditionally; positions
/// past the end of a short slice read as zero. Bytes after the first `N` are ignored.
///
/// ## Leaks
/// The function always touches exactly `N` positions of each input. Whether the lengths match
/// is folded into the result, but the lengths themselves are considered public.
///
/// ## Examples
///
/// ```rust
/// use natrium_constant_time::verify;
/// assert!(verify::<4>(b"abcd", b"abcd"));
/// assert!(!verify::<4>(b"abcd", b"abce"));
/// assert!(!verify::<4>(b"abcd", b"abcde"));
/// assert!(!verify::<4>(b"abc", b"abc"));
/// ```
#[inline]
pub fn verify<const N: usize>(a: &[u8], b: &[u8]) -> bool {
    let mut diff = black_box((a.len() ^ b.len()) | (a.len() < N) as usize);
    for i in 0..N {
        let x = black_box(a.get(i).copied().unwrap_or(0));
        let y = black_box(b.get(i).copied().unwrap_or(0));
        diff |= (x ^ y) as usize;
    }
    black_box(diff) == 0
}

/// Compares two 16 byte strings in constant time, see [verify].
///
/// ```rust
/// use natrium_constant_time::verify_16;
/// let tag = [0x42u8; 16];
/// let mut forged = tag;
/// forged[15] = 0;
/// assert!(verify_16(&tag, &tag));
/// assert!(!verify_16(&tag, &forged));
/// ```
#[inline]
pub fn verify_16(a: &[u8], b: &[u8]) -> bool {
    verify::<16>(a, b)
}

/// Compares two 32 byte strings in constant time, see [verify].
///
/// ```rust
/// use natrium_constant_time::verify_32;
/// assert!(verify_32(&[1u8; 32], &[1u8; 32]));
/// assert!(!verify_32(&[1u8; 32], &[1u8; 31]));
/// ```
#[inline]
pub fn verify_32(a: &[u8], b: &[u8]) -> bool {
    verify::<32>(a, b)
}
