use proptest::prelude::*;

use natrium::util::*;

/// Reference ordering: little endian unsigned integers after right zero-padding
fn reference_compare(a: &[u8], b: &[u8]) -> i32 {
    let len = a.len().max(b.len());
    let mut pa = a.to_vec();
    let mut pb = b.to_vec();
    pa.resize(len, 0);
    pb.resize(len, 0);
    pa.reverse();
    pb.reverse();
    match pa.cmp(&pb) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hex_decode_inverts_encode(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        for case in [Case::Lower, Case::Upper] {
            let text = encode_hex(&bytes, case);
            prop_assert_eq!(text.len(), 2 * bytes.len());
            prop_assert_eq!(decode_hex(&text, Padding::Strict).unwrap(), bytes.clone());
        }
        prop_assert_eq!(encode_hex_lower(&bytes), hex::encode(&bytes));
        prop_assert_eq!(encode_hex_upper(&bytes), hex::encode_upper(&bytes));
    }

    #[test]
    fn hex_decode_agrees_with_reference(text in "[0-9a-fA-F]{0,64}") {
        let ours = decode_hex(&text, Padding::Strict);
        match hex::decode(&text) {
            Ok(bytes) => prop_assert_eq!(ours.unwrap(), bytes),
            Err(_) => prop_assert_eq!(ours, Err(CodecError::OddHexLength { len: text.len() })),
        }
    }

    #[test]
    fn hex_decode_reports_first_invalid_character(
        prefix in "([0-9a-f]{2}){0,8}",
        bad in "[g-zG-Z !#.]",
        suffix in "[0-9a-zA-Z]",
    ) {
        let text = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(
            decode_hex(&text, Padding::Strict),
            Err(CodecError::InvalidHexCharacter { index: prefix.len() })
        );
    }

    #[test]
    fn lenient_odd_length_is_left_padded(text in "[0-9a-f]([0-9a-f]{2}){0,16}") {
        let padded = format!("0{text}");
        prop_assert_eq!(
            decode_hex(&text, Padding::Lenient),
            decode_hex(&padded, Padding::Strict)
        );
    }

    #[test]
    fn integer_stores_invert_loads(x in any::<u32>(), y in any::<u64>()) {
        prop_assert_eq!(load4(&store32_le(x)), Ok(x));

        let mut be = store4_be(x);
        be.reverse();
        prop_assert_eq!(load4(&be), Ok(x));

        let mut be3 = store3(x);
        be3.reverse();
        prop_assert_eq!(load3(&be3), x & 0xff_ffff);

        prop_assert_eq!(load8(&store64_le(y)), Ok(y));
        prop_assert_eq!(Int64Pair::from_u64(y).to_le_bytes(), store64_le(y));
    }

    #[test]
    fn numeric_decomposition_of_integral_values(v in -(1i64 << 53)..(1i64 << 53)) {
        prop_assert_eq!(numeric_to_64bit_integer(v as f64), Ok(Int64Pair::from_i64(v)));
    }

    #[test]
    fn compare_is_a_total_order(
        a in prop::collection::vec(any::<u8>(), 0..24),
        b in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        prop_assert_eq!(compare(&a, &a), 0);
        prop_assert_eq!(compare(&a, &b), -compare(&b, &a));
        prop_assert_eq!(compare(&a, &b), reference_compare(&a, &b));
    }

    #[test]
    fn compare_of_small_alphabet(
        a in prop::collection::vec(0u8..3, 0..6),
        b in prop::collection::vec(0u8..3, 0..6),
    ) {
        // Small alphabet makes equal prefixes and ties likely
        prop_assert_eq!(compare(&a, &b), reference_compare(&a, &b));
    }

    #[test]
    fn constant_time_equals_is_equality(
        a in prop::collection::vec(any::<u8>(), 0..48),
        b in prop::collection::vec(any::<u8>(), 0..48),
    ) {
        prop_assert_eq!(constant_time_equals(&a, &b), a == b);
        prop_assert!(constant_time_equals(&a, &a.clone()));
        prop_assert_eq!(memcmp(&a, &b), if a == b { 0 } else { -1 });
    }

    #[test]
    fn xor_twice_is_identity(
        a in prop::collection::vec(any::<u8>(), 0..64),
        extra in prop::collection::vec(any::<u8>(), 0..16),
        key in any::<u8>(),
    ) {
        let mut b: Vec<u8> = a.iter().map(|v| v.rotate_left(3) ^ key).collect();
        b.extend(extra);
        prop_assert_eq!(xor(&xor(&a, &b), &b), a.clone());
        prop_assert_eq!(xor(&a, &b).len(), a.len().min(b.len()));
    }

    #[test]
    fn verify_32_detects_any_single_mismatch(
        a in prop::array::uniform32(any::<u8>()),
        pos in 0usize..32,
        flip in 1u8..=255,
    ) {
        prop_assert!(verify_32(&a, &a));
        let mut b = a;
        b[pos] ^= flip;
        prop_assert!(!verify_32(&a, &b));
        prop_assert!(!verify_16(&a[..16], &b[..16]) || pos >= 16);
    }

    #[test]
    fn int_array_bridge(bytes in prop::collection::vec(any::<u8>(), 0..64), shift in 0i64..8) {
        let ints: Vec<i64> = to_int_array(&bytes)
            .into_iter()
            .map(|v| i64::from(v) + (shift << 8))
            .collect();
        prop_assert_eq!(from_int_array(&ints), bytes);
    }
}
