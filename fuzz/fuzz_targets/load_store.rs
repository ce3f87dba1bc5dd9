#![no_main]
extern crate natrium;

use libfuzzer_sys::fuzz_target;

use natrium::codec::{load3, load4, load8, store32_le, store3, store64_le};

fuzz_target!(|data: &[u8]| {
    if data.len() >= 3 {
        let v = load3(data);
        assert!(v <= 0xff_ffff);
        let mut be = store3(v);
        be.reverse();
        assert_eq!(&be, &data[..3]);
    }

    match load4(data) {
        Ok(v) => assert_eq!(&store32_le(v), &data[..4]),
        Err(_) => assert!(data.len() < 4),
    }

    match load8(data) {
        Ok(v) => assert_eq!(&store64_le(v), &data[..8]),
        Err(_) => assert!(data.len() < 8),
    }
});
