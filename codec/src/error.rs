use thiserror::Error;

/// Errors reported by the codec functions
///
/// None of the variants carries input data; the values are lengths and positions only, which
/// are considered public.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer bytes were supplied than a fixed width load needs
    #[error("Expected at least {expected} bytes; {actual} given")]
    InvalidLength {
        /// Number of bytes the load needs
        expected: usize,
        /// Number of bytes supplied
        actual: usize,
    },
    /// The argument can not be represented by the requested type
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Strict hex decoding was asked to decode an odd number of characters
    #[error("Expected an even number of hexadecimal characters; {len} given")]
    OddHexLength {
        /// Length of the rejected text
        len: usize,
    },
    /// Hex decoding encountered a character that is not a hexadecimal digit
    #[error("Invalid hexadecimal character at position {index}")]
    InvalidHexCharacter {
        /// Position of the first invalid character in the caller's text
        index: usize,
    },
}

impl CodecError {
    /// Ensures that at least `expected` bytes are available
    ///
    /// Returns Ok(()) if `actual >= expected`, otherwise an [CodecError::InvalidLength]
    /// carrying both lengths
    pub fn ensure_length(expected: usize, actual: usize) -> Result<(), Self> {
        match actual >= expected {
            true => Ok(()),
            false => Err(CodecError::InvalidLength { expected, actual }),
        }
    }
}
