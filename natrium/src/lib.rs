#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

/// Integer, hexadecimal and integer array conversions
pub use natrium_codec as codec;
/// Constant-time comparison, verification and xor
pub use natrium_constant_time as constant_time;

pub mod util;
