//! ISBN normalization and checksum validation

/// Strip every character that is not an ASCII digit or an uppercase `X`.
///
/// Hyphens, spaces and any other separators are dropped; the remaining
/// characters keep their original order.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .collect()
}

/// Check whether `input` is a well-formed ISBN-13.
///
/// The value is normalized first, so `978-1-61729-045-9` and
/// `9781617290459` are both accepted. An `X` is weighted like any other
/// character, as its offset from `'0'`.
pub fn is_valid(input: &str) -> bool {
    let digits = normalize(input);
    if digits.len() != 13 {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            u32::from(b - b'0') * weight
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_hyphens() {
        assert_eq!(normalize("913-1-31-125412-0"), "9131311254120");
    }

    #[test]
    fn test_normalize_keeps_trailing_x() {
        assert_eq!(normalize("913-1-31-125412-X"), "913131125412X");
    }

    #[test]
    fn test_normalize_drops_lowercase_and_spaces() {
        assert_eq!(normalize(" 0-8044 2957-x "), "080442957");
        assert_eq!(normalize("ISBN 978 3 16 148410 0"), "9783161484100");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["913-1-31-125412-X", "abc", "ISBN: 0-306-40615-2", "XxX-1"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_keeps_only_digits_and_x_in_order() {
        let input = "a1-b2 X c3_x4";
        assert_eq!(normalize(input), "12X34");
    }

    #[test]
    fn test_valid_isbn13() {
        assert!(is_valid("9781617290459"));
        assert!(is_valid("978-3-16-148410-0"));
    }

    #[test]
    fn test_x_counts_as_its_offset_from_zero() {
        // 9 + 7*3 + 8 + 4*3 + ('X' - '0') = 90
        assert!(is_valid("978-0-00-000004-X"));
        assert!(!is_valid("978000000005X"));
    }

    #[test]
    fn test_isbn10_is_rejected() {
        assert!(!is_valid("0-306-40615-2"));
        assert!(!is_valid("0-8044-2957-X"));
    }

    #[test]
    fn test_invalid_checksum() {
        assert!(!is_valid("9781617290458"));
        assert!(!is_valid("978-3-16-148410-1"));
    }

    #[test]
    fn test_invalid_length() {
        assert!(!is_valid("12345"));
        assert!(!is_valid(""));
        assert!(!is_valid("97816172904590"));
    }
}
