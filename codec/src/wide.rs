//! Two word representation of 64 bit integers
//!
//! Useful on targets or in formats that handle 64 bit quantities as a pair of 32 bit words.
//! The pair always holds the two's complement bit pattern of the represented value.

use crate::{int::store32_le, CodecError};

/// 2^32 as a float, the weight of the high word
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A 64 bit integer split into its high and low 32 bit halves
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int64Pair {
    /// Bits 32..64
    pub high: u32,
    /// Bits 0..32
    pub low: u32,
}

impl Int64Pair {
    /// Creates a pair from its halves
    pub const fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Splits an unsigned 64 bit integer
    ///
    /// ```rust
    /// use natrium_codec::wide::Int64Pair;
    /// assert_eq!(Int64Pair::from_u64(0x0102030405060708), Int64Pair::new(0x01020304, 0x05060708));
    /// ```
    pub const fn from_u64(v: u64) -> Self {
        Self {
            high: (v >> 32) as u32,
            low: (v & 0xffff_ffff) as u32,
        }
    }

    /// Splits a signed 64 bit integer, keeping its two's complement bit pattern
    ///
    /// ```rust
    /// use natrium_codec::wide::Int64Pair;
    /// assert_eq!(Int64Pair::from_i64(-1), Int64Pair::new(u32::MAX, u32::MAX));
    /// assert_eq!(Int64Pair::from_i64(-2), Int64Pair::new(u32::MAX, u32::MAX - 1));
    /// ```
    pub const fn from_i64(v: i64) -> Self {
        Self::from_u64(v as u64)
    }

    /// Joins both halves into an unsigned 64 bit integer
    pub const fn to_u64(self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }

    /// Joins both halves and reinterprets the result as a signed 64 bit integer
    pub const fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    /// Little endian encoding of the represented value; same output as
    /// [store64_le](crate::int::store64_le)
    ///
    /// ```rust
    /// use natrium_codec::{int::store64_le, wide::Int64Pair};
    /// let v = 0xfedc_ba98_7654_3210;
    /// assert_eq!(Int64Pair::from_u64(v).to_le_bytes(), store64_le(v));
    /// ```
    pub fn to_le_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&store32_le(self.low));
        out[4..].copy_from_slice(&store32_le(self.high));
        out
    }
}

impl From<u64> for Int64Pair {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl From<i64> for Int64Pair {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl From<Int64Pair> for u64 {
    fn from(v: Int64Pair) -> Self {
        v.to_u64()
    }
}

/// Decomposes an arbitrary numeric value into a two word 64 bit integer
///
/// The value is truncated toward zero first. Non-negative values get
/// `high = min(floor(v / 2^32), 2^32 - 1)` and `low = v mod 2^32`, so values beyond the 64 bit
/// range keep their low word and saturate the high word. Negative values are decomposed in two's
/// complement, saturating at `i64::MIN`.
///
/// Fails with [CodecError::InvalidArgument] for NaN and infinities.
///
/// # Examples
///
/// ```rust
/// use natrium_codec::wide::{numeric_to_64bit_integer, Int64Pair};
/// assert_eq!(numeric_to_64bit_integer(4294967297.0), Ok(Int64Pair::new(1, 1)));
/// assert_eq!(numeric_to_64bit_integer(-1.0), Ok(Int64Pair::new(u32::MAX, u32::MAX)));
/// assert_eq!(numeric_to_64bit_integer(12.75), Ok(Int64Pair::new(0, 12)));
/// assert!(numeric_to_64bit_integer(f64::NAN).is_err());
/// ```
pub fn numeric_to_64bit_integer(num: f64) -> Result<Int64Pair, CodecError> {
    if !num.is_finite() {
        log::trace!("numeric_to_64bit_integer: rejected non-finite value");
        return Err(CodecError::InvalidArgument(
            "expected a finite numeric value",
        ));
    }

    let t = num.trunc();
    if t < 0.0 {
        // `as` saturates at i64::MIN
        return Ok(Int64Pair::from_i64(t as i64));
    }

    let high = (t / TWO_POW_32).floor().min(u32::MAX as f64) as u32;
    let low = (t % TWO_POW_32) as u32;
    Ok(Int64Pair::new(high, low))
}
