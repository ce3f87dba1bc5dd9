#![no_main]
extern crate natrium;

use libfuzzer_sys::fuzz_target;

use natrium::codec::{decode_hex, encode_hex, CodecError, Case, Padding};

fuzz_target!(|text: &[u8]| {
    let strict = decode_hex(text, Padding::Strict);
    match hex::decode(text) {
        Ok(bytes) => {
            assert_eq!(strict.as_deref(), Ok(&bytes[..]));
            assert_eq!(encode_hex(&bytes, Case::Lower), hex::encode(&bytes));
        }
        Err(hex::FromHexError::OddLength) => {
            assert_eq!(strict, Err(CodecError::OddHexLength { len: text.len() }));
        }
        Err(hex::FromHexError::InvalidHexCharacter { index, .. }) => {
            assert_eq!(strict, Err(CodecError::InvalidHexCharacter { index }));
        }
        Err(e) => panic!("unexpected reference error {e}"),
    }

    // Lenient decoding must never panic and must agree with strict decoding on even input
    let lenient = decode_hex(text, Padding::Lenient);
    if text.len() % 2 == 0 {
        assert_eq!(lenient, strict);
    }
});
