//! Loads and stores of fixed width integers
//!
//! Loads read little endian. Stores exist in big endian (`store3`, `store4_be`) and little
//! endian (`store32_le`, `store64_le`) flavours. All of them are straight shift-and-mask code
//! without branches on the value.

use crate::CodecError;

/// Mask for 24 bit values
pub const MASK_24: u32 = 0x00ff_ffff;

/// Loads the first three bytes as a little endian 24 bit integer
///
/// # Panics
///
/// The length is not checked beyond slice indexing; callers must supply at least three bytes.
///
/// # Examples
///
/// ```rust
/// use natrium_codec::int::load3;
/// assert_eq!(load3(&[0x01, 0x02, 0x03]), 0x030201);
/// assert_eq!(load3(&[0xff, 0xff, 0xff, 0xff]), 0xffffff);
/// ```
#[inline]
pub fn load3(bytes: &[u8]) -> u32 {
    let mut result = bytes[0] as u32;
    result |= (bytes[1] as u32) << 8;
    result |= (bytes[2] as u32) << 16;
    result & MASK_24
}

/// Loads the first four bytes as a little endian 32 bit integer
///
/// # Examples
///
/// ```rust
/// use natrium_codec::{int::load4, CodecError};
/// assert_eq!(load4(&[0x78, 0x56, 0x34, 0x12]), Ok(0x12345678));
/// assert_eq!(
///     load4(&[0x78, 0x56]),
///     Err(CodecError::InvalidLength { expected: 4, actual: 2 })
/// );
/// ```
#[inline]
pub fn load4(bytes: &[u8]) -> Result<u32, CodecError> {
    CodecError::ensure_length(4, bytes.len()).inspect_err(|_| {
        log::trace!("load4: rejected input of {} bytes", bytes.len());
    })?;
    let mut result = bytes[0] as u32;
    result |= (bytes[1] as u32) << 8;
    result |= (bytes[2] as u32) << 16;
    result |= (bytes[3] as u32) << 24;
    Ok(result)
}

/// Loads the first eight bytes as a little endian 64 bit integer; the inverse of [store64_le]
///
/// ```rust
/// use natrium_codec::int::{load8, store64_le};
/// assert_eq!(load8(&store64_le(0x0102030405060708)), Ok(0x0102030405060708));
/// assert!(load8(&[0; 7]).is_err());
/// ```
#[inline]
pub fn load8(bytes: &[u8]) -> Result<u64, CodecError> {
    CodecError::ensure_length(8, bytes.len()).inspect_err(|_| {
        log::trace!("load8: rejected input of {} bytes", bytes.len());
    })?;
    let lo = load4(&bytes[..4])? as u64;
    let hi = load4(&bytes[4..8])? as u64;
    Ok(lo | (hi << 32))
}

/// Stores the low 24 bits of an integer as three big endian bytes
///
/// ```rust
/// use natrium_codec::int::store3;
/// assert_eq!(store3(0x010203), [0x01, 0x02, 0x03]);
/// assert_eq!(store3(0xff010203), [0x01, 0x02, 0x03]);
/// ```
#[inline]
pub fn store3(int: u32) -> [u8; 3] {
    [
        ((int >> 16) & 0xff) as u8,
        ((int >> 8) & 0xff) as u8,
        (int & 0xff) as u8,
    ]
}

/// Stores a 32 bit integer as four big endian bytes
///
/// ```rust
/// use natrium_codec::int::store4_be;
/// assert_eq!(store4_be(0x01020304), [0x01, 0x02, 0x03, 0x04]);
/// ```
#[inline]
pub fn store4_be(int: u32) -> [u8; 4] {
    [
        ((int >> 24) & 0xff) as u8,
        ((int >> 16) & 0xff) as u8,
        ((int >> 8) & 0xff) as u8,
        (int & 0xff) as u8,
    ]
}

/// Stores a 32 bit integer as four little endian bytes
///
/// ```rust
/// use natrium_codec::int::store32_le;
/// assert_eq!(store32_le(0x01020304), [0x04, 0x03, 0x02, 0x01]);
/// ```
#[inline]
pub fn store32_le(int: u32) -> [u8; 4] {
    [
        (int & 0xff) as u8,
        ((int >> 8) & 0xff) as u8,
        ((int >> 16) & 0xff) as u8,
        ((int >> 24) & 0xff) as u8,
    ]
}

/// Stores a 64 bit integer as eight little endian bytes
///
/// ```rust
/// use natrium_codec::int::store64_le;
/// assert_eq!(
///     store64_le(0x0102030405060708),
///     [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
/// );
/// ```
#[inline]
pub fn store64_le(int: u64) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = ((int >> (8 * i)) & 0xff) as u8;
    }
    out
}
