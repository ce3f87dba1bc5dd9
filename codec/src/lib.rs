#![warn(missing_docs)]
//! Conversions between byte strings, fixed width integers and hexadecimal text
//!
//! Everything in this crate is written to be usable on secret data: integer loads and stores
//! are plain shift-and-mask code, and the hexadecimal codec uses neither lookup tables nor
//! branches that depend on the converted data.
//!
//! # Examples
//!
//! ```rust
//! use natrium_codec::{decode_hex, encode_hex, load4, store32_le, Case, Padding};
//!
//! let nonce = store32_le(0xdeadbeef);
//! let text = encode_hex(&nonce, Case::Lower);
//! assert_eq!(text, "efbeadde");
//!
//! let bytes = decode_hex(&text, Padding::Strict)?;
//! assert_eq!(load4(&bytes)?, 0xdeadbeef);
//! # Ok::<(), natrium_codec::CodecError>(())
//! ```
//!
//! # Errors
//!
//! Failures are reported as [CodecError]. Error values and log records carry lengths and
//! positions, never input data.

mod error;
pub mod hex;
pub mod int;
pub mod int_array;
pub mod wide;

pub use error::CodecError;
pub use crate::hex::{
    decode_hex, encode_hex, encode_hex_lower, encode_hex_upper, Case, HexDisplay, Padding,
};
pub use crate::int::{load3, load4, load8, store32_le, store3, store4_be, store64_le};
pub use crate::int_array::{from_int_array, to_int_array};
pub use crate::wide::{numeric_to_64bit_integer, Int64Pair};
