#![no_main]
extern crate arbitrary;
extern crate natrium;

use libfuzzer_sys::fuzz_target;

use natrium::constant_time::{compare, compare_len, constant_time_equals, verify_32, xor};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Pair {
    pub a: Box<[u8]>,
    pub b: Box<[u8]>,
    pub len: u8,
}

fuzz_target!(|input: Pair| {
    let (a, b) = (&input.a[..], &input.b[..]);

    let c = compare(a, b);
    assert_eq!(c, -compare(b, a));
    assert_eq!(c == 0 && a.len() == b.len(), a == b);
    assert_eq!(constant_time_equals(a, b), a == b);
    assert_eq!(verify_32(a, b), a.len() == b.len() && a.len() >= 32 && a[..32] == b[..32]);

    let _ = compare_len(a, b, input.len as usize);

    let x = xor(a, b);
    assert_eq!(x.len(), a.len().min(b.len()));
});
