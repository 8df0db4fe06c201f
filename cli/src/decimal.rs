//! Parsing of the integer operands of the signed encoders.

/// Parses the decimal integer at the start of `s` and narrows it to
/// 32 bits.
///
/// This follows the rules of C's `strtol(s, NULL, 10)`: leading
/// whitespace and a single `+` or `-` are accepted, the longest run
/// of decimal digits after that is used, and anything after it is
/// ignored.  If there are no digits at all, the result is zero.  The
/// value saturates at the limits of a 64-bit integer and is then
/// truncated to its low 32 bits (so `"4294967295"` gives -1).
pub fn parse_leading_i32(s: &str) -> i32 {
    let trimmed = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        // Accumulating negative values directly lets us reach
        // i64::MIN without overflow.
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value as i32
}

#[cfg(test)]
mod tests {
    use super::parse_leading_i32;

    #[test]
    fn test_plain_values() {
        assert_eq!(parse_leading_i32("0"), 0);
        assert_eq!(parse_leading_i32("5"), 5);
        assert_eq!(parse_leading_i32("-5"), -5);
        assert_eq!(parse_leading_i32("+7"), 7);
        assert_eq!(parse_leading_i32("2147483647"), i32::MAX);
        assert_eq!(parse_leading_i32("-2147483648"), i32::MIN);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_leading_i32("  42"), 42);
        assert_eq!(parse_leading_i32("\t-3"), -3);
    }

    #[test]
    fn test_trailing_junk_is_ignored() {
        assert_eq!(parse_leading_i32("12abc"), 12);
        assert_eq!(parse_leading_i32("0x10"), 0);
        assert_eq!(parse_leading_i32("-8.5"), -8);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_leading_i32(""), 0);
        assert_eq!(parse_leading_i32("-"), 0);
        assert_eq!(parse_leading_i32("abc"), 0);
        assert_eq!(parse_leading_i32("--1"), 0);
    }

    #[test]
    fn test_out_of_range_values_are_truncated() {
        assert_eq!(parse_leading_i32("2147483648"), i32::MIN);
        assert_eq!(parse_leading_i32("4294967295"), -1);
        assert_eq!(parse_leading_i32("-2147483649"), i32::MAX);
    }

    #[test]
    fn test_huge_values_saturate_before_truncation() {
        // i64::MAX truncates to -1 and i64::MIN to 0.
        assert_eq!(parse_leading_i32("99999999999999999999"), -1);
        assert_eq!(parse_leading_i32("-99999999999999999999"), 0);
    }
}
