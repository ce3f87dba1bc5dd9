//! Every byte utility in one flat namespace
//!
//! Higher level primitives (stream ciphers, authenticators, curve arithmetic) tend to need a
//! handful of these at once; importing `natrium::util::*` brings in the integer codec, the
//! hexadecimal codec, the integer array bridge and the constant-time comparators together.
//!
//! ```rust
//! use natrium::util::*;
//!
//! let key = decode_hex("000102030405060708090a0b0c0d0e0f", Padding::Strict)?;
//! assert_eq!(load4(&key)?, 0x03020100);
//! assert_eq!(load3(&key[4..]), 0x060504);
//! assert!(constant_time_equals(&key, &from_int_array(&(0..16).collect::<Vec<i64>>())));
//! assert_eq!(compare(&key, &key), 0);
//! # Ok::<(), CodecError>(())
//! ```

pub use natrium_codec::{
    decode_hex, encode_hex, encode_hex_lower, encode_hex_upper, from_int_array, load3, load4,
    load8, numeric_to_64bit_integer, store32_le, store3, store4_be, store64_le, to_int_array,
    Case, CodecError, HexDisplay, Int64Pair, Padding,
};
pub use natrium_constant_time::{
    compare, compare_len, constant_time_equals, memcmp, verify, verify_16, verify_32, xor,
    xor_into,
};
