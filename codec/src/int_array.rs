//! Conversion between byte strings and arrays of small integers

/// Copies a byte string into an array of integers, one element per byte
///
/// ```rust
/// use natrium_codec::int_array::to_int_array;
/// assert_eq!(to_int_array(b"\x00\x7f\xff"), vec![0, 127, 255]);
/// ```
pub fn to_int_array(bytes: &[u8]) -> Vec<u8> {
    bytes.to_vec()
}

/// Packs an array of integers into a byte string, keeping the low eight bits of every element
///
/// ```rust
/// use natrium_codec::int_array::from_int_array;
/// assert_eq!(from_int_array(&[0, 255, 256, -1, 0x1234]), vec![0x00, 0xff, 0x00, 0xff, 0x34]);
/// ```
pub fn from_int_array(ints: &[i64]) -> Vec<u8> {
    ints.iter().map(|v| (v & 0xff) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_round_trip_through_bytes() {
        let bytes: Vec<u8> = (0..=255u8).rev().collect();
        let ints: Vec<i64> = to_int_array(&bytes).into_iter().map(i64::from).collect();
        assert_eq!(from_int_array(&ints), bytes);
    }

    #[test]
    fn empty() {
        assert!(to_int_array(&[]).is_empty());
        assert!(from_int_array(&[]).is_empty());
    }

    #[test]
    fn negative_values_wrap_like_twos_complement() {
        assert_eq!(from_int_array(&[-128, -255, i64::MIN, i64::MAX]), vec![0x80, 0x01, 0x00, 0xff]);
    }
}
