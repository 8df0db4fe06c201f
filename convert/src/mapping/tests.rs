use super::super::error::{InvalidDigit, Radix};
use super::*;

#[test]
fn test_oct_to_bin() {
    assert_eq!(oct_to_bin("725"), "111010101");
    assert_eq!(oct_to_bin("345"), "011100101");
    assert_eq!(oct_to_bin("777"), "111111111");
    assert_eq!(oct_to_bin("0"), "000");
    assert_eq!(oct_to_bin("12345670"), "001010011100101110111000");
}

#[test]
fn test_oct_to_bin_keeps_leading_zero_digits() {
    assert_eq!(oct_to_bin("0000"), "000000000000");
    assert_eq!(oct_to_bin("01"), "000001");
}

#[test]
fn test_oct_to_bin_empty() {
    assert_eq!(oct_to_bin(""), "");
}

#[test]
fn test_oct_to_bin_skips_non_octal() {
    // '8', '9' and letters are not octal digits, so they contribute
    // nothing.
    assert_eq!(oct_to_bin("9"), "");
    assert_eq!(oct_to_bin("7a5"), "111101");
    assert_eq!(oct_to_bin("1-8-2"), "001010");
}

#[test]
fn test_hex_to_bin() {
    assert_eq!(hex_to_bin("A3"), "10100011");
    assert_eq!(hex_to_bin("FF"), "11111111");
    assert_eq!(hex_to_bin("0"), "0000");
    assert_eq!(
        hex_to_bin("DEADBEEF"),
        "11011110101011011011111011101111"
    );
}

#[test]
fn test_hex_to_bin_case_insensitive() {
    assert_eq!(hex_to_bin("ff"), "11111111");
    assert_eq!(hex_to_bin("1a2B"), "0001101000101011");
    assert_eq!(hex_to_bin("cafe"), hex_to_bin("CAFE"));
}

#[test]
fn test_hex_to_bin_empty() {
    assert_eq!(hex_to_bin(""), "");
}

#[test]
fn test_hex_to_bin_zeroes_invalid_digits() {
    // Unlike oct_to_bin, invalid characters are not dropped.
    assert_eq!(hex_to_bin("Z"), "0000");
    assert_eq!(hex_to_bin("g1"), "00000001");
}

#[test]
fn test_oct_to_hex() {
    assert_eq!(oct_to_hex("725"), "1D5");
    assert_eq!(oct_to_hex("345"), "E5");
    assert_eq!(oct_to_hex("777"), "1FF");
    assert_eq!(oct_to_hex("377"), "FF");
    assert_eq!(oct_to_hex("17"), "F");
    assert_eq!(oct_to_hex("10"), "8");
    assert_eq!(oct_to_hex("12345670"), "29CBB8");
}

#[test]
fn test_oct_to_hex_zero() {
    assert_eq!(oct_to_hex("0"), "0");
    assert_eq!(oct_to_hex("00"), "0");
    assert_eq!(oct_to_hex("0000"), "0");
    assert_eq!(oct_to_hex(""), "0");
    // Nothing survives the octal filter, so this is zero too.
    assert_eq!(oct_to_hex("9"), "0");
}

#[test]
fn test_oct_to_hex_strips_leading_zeroes() {
    assert_eq!(oct_to_hex("0001"), "1");
    assert_eq!(oct_to_hex("000725"), "1D5");
}

#[test]
fn test_into_variants_append() {
    let mut s = String::from(">");
    oct_to_bin_into("7", &mut s);
    hex_to_bin_into("a", &mut s);
    oct_to_hex_into("725", &mut s);
    assert_eq!(s, ">11110101D5");
}

#[test]
fn test_strict_accepts_valid_input() {
    assert_eq!(oct_to_bin_strict("725"), Ok("111010101".to_string()));
    assert_eq!(oct_to_hex_strict("725"), Ok("1D5".to_string()));
    assert_eq!(hex_to_bin_strict("aF"), Ok("10101111".to_string()));
    assert_eq!(oct_to_hex_strict(""), Ok("0".to_string()));
}

#[test]
fn test_strict_rejects_invalid_input() {
    assert_eq!(
        oct_to_bin_strict("7a5"),
        Err(InvalidDigit {
            radix: Radix::Octal,
            position: 1,
            ch: 'a',
        })
    );
    assert_eq!(
        oct_to_hex_strict("128"),
        Err(InvalidDigit {
            radix: Radix::Octal,
            position: 2,
            ch: '8',
        })
    );
    assert_eq!(
        hex_to_bin_strict("ég"),
        Err(InvalidDigit {
            radix: Radix::Hexadecimal,
            position: 0,
            ch: 'é',
        })
    );
}

#[test]
fn test_digit_mapping_dispatch() {
    for mapping in DigitMapping::ALL {
        assert_eq!(mapping.to_string(), mapping.name());
    }
    assert_eq!(DigitMapping::OctToBin.apply("725"), "111010101");
    assert_eq!(DigitMapping::OctToHex.apply("725"), "1D5");
    assert_eq!(DigitMapping::HexToBin.apply("725"), "011100100101");
    assert_eq!(DigitMapping::HexToBin.input_radix(), Radix::Hexadecimal);
    assert!(DigitMapping::OctToHex.apply_strict("8").is_err());
    assert!(DigitMapping::HexToBin.apply_strict("8").is_ok());
}

#[cfg(test)]
mod proptests {
    use super::super::{hex_to_bin, oct_to_bin, oct_to_bin_strict, oct_to_hex};
    use test_strategy::proptest;

    fn decode_triplet(bits: &str) -> char {
        let value = u32::from_str_radix(bits, 2).unwrap();
        char::from_digit(value, 8).unwrap()
    }

    #[proptest]
    fn oct_to_bin_is_three_bits_per_digit(#[strategy("[0-7]{0,40}")] oct: String) {
        let bits = oct_to_bin(&oct);
        assert_eq!(bits.len(), 3 * oct.len());
        assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
    }

    #[proptest]
    fn oct_to_bin_round_trips(#[strategy("[0-7]{0,40}")] oct: String) {
        let bits = oct_to_bin(&oct);
        let decoded: String = bits
            .as_bytes()
            .chunks(3)
            .map(|group| decode_triplet(std::str::from_utf8(group).unwrap()))
            .collect();
        assert_eq!(decoded, oct);
    }

    #[proptest]
    fn hex_to_bin_is_four_bits_per_digit(#[strategy("[0-9a-fA-F]{0,40}")] hex: String) {
        assert_eq!(hex_to_bin(&hex).len(), 4 * hex.len());
    }

    #[proptest]
    fn hex_to_bin_ignores_case(#[strategy("[0-9a-fA-F]{0,40}")] hex: String) {
        let upper = hex_to_bin(&hex.to_uppercase());
        let lower = hex_to_bin(&hex.to_lowercase());
        assert_eq!(hex_to_bin(&hex), upper);
        assert_eq!(upper, lower);
    }

    #[proptest]
    fn oct_to_hex_agrees_with_native_formatting(n: u64) {
        let oct = format!("{n:o}");
        assert_eq!(oct_to_hex(&oct), format!("{n:X}"));
    }

    #[proptest]
    fn oct_to_hex_has_no_leading_zero(#[strategy("[0-7]{0,40}")] oct: String) {
        let hex = oct_to_hex(&oct);
        assert!(!hex.is_empty());
        if hex != "0" {
            assert!(!hex.starts_with('0'), "{oct} -> {hex}");
        }
    }

    #[proptest]
    fn strict_and_permissive_agree_on_valid_input(#[strategy("[0-7]{0,40}")] oct: String) {
        assert_eq!(oct_to_bin_strict(&oct), Ok(oct_to_bin(&oct)));
    }
}
