//! Hexadecimal encoding and decoding without cache-timing leaks
//!
//! Nibbles are mapped to and from ASCII with arithmetic on sign-extended `i32` values instead of
//! lookup tables or comparisons, so neither the memory access pattern nor the branches taken
//! depend on the data being converted.

use core::hint::black_box;
use std::fmt::{self, Display};

use zeroize::Zeroize;

use crate::CodecError;

/// Letter case of the encoded hexadecimal digits `a`-`f`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `0123456789abcdef`
    #[default]
    Lower,
    /// `0123456789ABCDEF`, as per RFC 4648
    Upper,
}

/// Handling of hexadecimal text with an odd number of characters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Reject odd-length text with [CodecError::OddHexLength]
    #[default]
    Strict,
    /// Decode odd-length text as if a `0` was prepended.
    ///
    /// Note that this shifts the byte boundaries of the whole input: `"123"` decodes to
    /// `[0x01, 0x23]`.
    Lenient,
}

/// Maps a nibble (0..16) to its ASCII digit
#[inline(always)]
fn nibble_to_ascii(nibble: u8, case: Case) -> u8 {
    let n = nibble as i32;
    // For n < 10 the shifted term is all ones and pulls the letter offset down to b'0'
    let (base, fix) = match case {
        Case::Lower => (87, !38),
        Case::Upper => (55, !6),
    };
    (base + n + (((n - 10) >> 8) & fix)) as u8
}

/// Maps an ASCII character to `(value, valid)` where `valid` is all ones for hexadecimal digits
/// of either case and zero otherwise
#[inline(always)]
fn ascii_to_nibble(c: u8) -> (i32, i32) {
    let c = black_box(c) as i32;
    let c_num = c ^ 48;
    let c_num0 = (c_num - 10) >> 8;
    let c_alpha = (c & !32) - 55;
    let c_alpha0 = ((c_alpha - 10) ^ (c_alpha - 16)) >> 8;
    let value = (c_num0 & c_num) | (c_alpha & c_alpha0);
    (value, c_num0 | c_alpha0)
}

/// Writes the two ASCII digits of every input byte into `out`
///
/// # Panics
///
/// If `out` is shorter than twice the input.
fn encode_into(bytes: &[u8], case: Case, out: &mut [u8]) {
    for (byte, pair) in bytes.iter().zip(out.chunks_exact_mut(2)) {
        pair[0] = nibble_to_ascii(byte >> 4, case);
        pair[1] = nibble_to_ascii(byte & 0xf, case);
    }
}

/// Encodes bytes as hexadecimal text, two characters per byte
///
/// # Examples
///
/// ```rust
/// use natrium_codec::hex::{encode_hex, Case};
/// assert_eq!(encode_hex(&[0xde, 0xad], Case::Lower), "dead");
/// assert_eq!(encode_hex(&[0xde, 0xad], Case::Upper), "DEAD");
/// assert_eq!(encode_hex(&[], Case::Lower), "");
/// ```
pub fn encode_hex(bytes: &[u8], case: Case) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(nibble_to_ascii(byte >> 4, case)));
        out.push(char::from(nibble_to_ascii(byte & 0xf, case)));
    }
    out
}

/// Shorthand for [encode_hex] with [Case::Lower]
pub fn encode_hex_lower(bytes: &[u8]) -> String {
    encode_hex(bytes, Case::Lower)
}

/// Shorthand for [encode_hex] with [Case::Upper]
pub fn encode_hex_upper(bytes: &[u8]) -> String {
    encode_hex(bytes, Case::Upper)
}

/// Decodes hexadecimal text of either letter case into bytes
///
/// Every character is validated and converted without branching on its value. Invalid
/// characters are collected over the whole input and reported afterwards as
/// [CodecError::InvalidHexCharacter] with the position of the first one; any partially decoded
/// output is zeroized before the error is returned.
///
/// Odd-length text fails with [CodecError::OddHexLength] under [Padding::Strict] and is
/// left-padded with a `0` under [Padding::Lenient].
///
/// # Examples
///
/// ```rust
/// use natrium_codec::{hex::{decode_hex, Padding}, CodecError};
/// assert_eq!(decode_hex("DeAd", Padding::Strict), Ok(vec![0xde, 0xad]));
/// assert_eq!(decode_hex("", Padding::Strict), Ok(vec![]));
/// assert_eq!(decode_hex("1", Padding::Lenient), Ok(vec![0x01]));
/// assert_eq!(decode_hex("1", Padding::Strict), Err(CodecError::OddHexLength { len: 1 }));
/// assert_eq!(
///     decode_hex("zz", Padding::Strict),
///     Err(CodecError::InvalidHexCharacter { index: 0 })
/// );
/// ```
pub fn decode_hex<T: AsRef<[u8]> + ?Sized>(
    text: &T,
    padding: Padding,
) -> Result<Vec<u8>, CodecError> {
    let text = text.as_ref();
    let len = text.len();

    let pad = match (len & 1, padding) {
        (0, _) => 0,
        (_, Padding::Lenient) => 1,
        (_, Padding::Strict) => {
            log::trace!("decode_hex: rejected odd length input ({len} characters)");
            return Err(CodecError::OddHexLength { len });
        }
    };

    let padded = std::iter::repeat(b'0').take(pad).chain(text.iter().copied());
    let mut out = Vec::with_capacity((len + pad) / 2);
    let mut acc = 0i32;
    let mut seen_invalid = 0usize;
    let mut first_invalid = 0usize;

    for (pos, c) in padded.enumerate() {
        let (value, valid) = ascii_to_nibble(c);

        // Record the position of the first invalid character without branching on it
        let invalid = (!valid & 1) as usize;
        let take = (invalid & !seen_invalid & 1).wrapping_neg();
        first_invalid = (first_invalid & !take) | (pos.wrapping_sub(pad) & take);
        seen_invalid |= invalid;

        match pos & 1 {
            0 => acc = value << 4,
            _ => out.push((acc | value) as u8),
        }
    }
    acc.zeroize();

    match black_box(seen_invalid) {
        0 => Ok(out),
        _ => {
            out.zeroize();
            log::trace!("decode_hex: rejected invalid character at position {first_invalid}");
            Err(CodecError::InvalidHexCharacter {
                index: first_invalid,
            })
        }
    }
}

/// Display adapter produced by [HexDisplay]
pub struct HexDisplayHelper<'a>(&'a [u8], Case);

impl Display for HexDisplayHelper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 128];
        let mut result = Ok(());
        for chunk in self.0.chunks(buf.len() / 2) {
            let encoded = &mut buf[..chunk.len() * 2];
            encode_into(chunk, self.1, encoded);
            // SAFETY: encode_into only writes the ASCII digits 0-9, a-f and A-F
            let text = unsafe { std::str::from_utf8_unchecked(encoded) };
            result = f.write_str(text);
            if result.is_err() {
                break;
            }
        }
        buf.zeroize();
        result
    }
}

/// Formats byte strings as constant-time hexadecimal
///
/// ```rust
/// use natrium_codec::hex::HexDisplay;
/// let key = [0x00, 0x0f, 0xa0, 0xff];
/// assert_eq!(format!("{}", key.fmt_hex()), "000fa0ff");
/// assert_eq!(key.fmt_hex_upper().to_string(), "000FA0FF");
/// ```
pub trait HexDisplay {
    /// Lowercase hexadecimal [Display] adapter
    fn fmt_hex(&self) -> HexDisplayHelper<'_>;
    /// Uppercase hexadecimal [Display] adapter
    fn fmt_hex_upper(&self) -> HexDisplayHelper<'_>;
}

impl<T: AsRef<[u8]> + ?Sized> HexDisplay for T {
    fn fmt_hex(&self) -> HexDisplayHelper<'_> {
        HexDisplayHelper(self.as_ref(), Case::Lower)
    }

    fn fmt_hex_upper(&self) -> HexDisplayHelper<'_> {
        HexDisplayHelper(self.as_ref(), Case::Upper)
    }
}
