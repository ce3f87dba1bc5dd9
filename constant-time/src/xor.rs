//! xor

use core::hint::black_box;

/// Xors two byte slices into a new vector
///
/// The output has the length of the shorter input; trailing bytes of the longer input are
/// ignored. This truncation is part of the contract and not an error.
///
/// # Leaks
/// This function may leak timing information in the following ways:
///
/// - The function execution time is linearly proportional to the shorter input length
/// - Memory access patterns follow a predictable sequential pattern
///
/// These leaks are generally considered acceptable in most cryptographic contexts
/// as they don't reveal information about the actual content being XORed.
///
/// # Examples
///
/// ```
/// use natrium_constant_time::xor;
/// assert_eq!(xor(b"hello", b"world"), b"\x1f\n\x1e\x00\x0b");
/// assert_eq!(xor(b"hello", b"wo"), b"\x1f\n");
/// assert!(xor(b"", b"world").is_empty());
/// ```
#[inline]
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = a[..a.len().min(b.len())].to_vec();
    xor_into(&mut out, b);
    out
}

/// Xors the source into the destination
///
/// Only the common prefix of both slices is touched; if `dst` is longer than `src`, its
/// remaining bytes stay unchanged.
///
/// # Examples
///
/// ```
/// use natrium_constant_time::xor_into;
/// let mut buf = *b"hello";
/// xor_into(&mut buf, b"wor");
/// assert_eq!(&buf, b"\x1f\n\x1elo");
/// ```
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (dv, sv) in dst.iter_mut().zip(src.iter()) {
        *black_box(dv) ^= black_box(*sv);
    }
}
