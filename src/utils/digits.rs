//! Digit normalization and parsing helpers

/// Strip every non-digit character, keeping the digits in order.
///
/// No length check happens here; `"abc"` normalizes to `""`.
///
/// # Example
///
/// ```
/// use brdocs::utils::normalize;
///
/// assert_eq!(normalize("123.456.789-09"), "12345678909");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Remove the canonical separators `.`, `-`, `/` and space, keeping
/// everything else.
///
/// Unlike [`normalize`], letters and other symbols survive, so a later digit
/// check can reject them.
pub fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | '-' | '/' | ' '))
        .collect()
}

/// Parse an all-digit string into its digit vector.
///
/// Returns `None` as soon as a non-digit is found.
pub fn parse_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Render a digit vector back to a string
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// True when every digit equals the first one (an empty slice counts)
pub fn all_equal(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("11.444.777/0001-61"), "11444777000161");
        assert_eq!(normalize("  123 456 "), "123456");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_drops_unicode_digits() {
        // Arabic-indic digits are not ASCII
        assert_eq!(normalize("١٢٣45"), "45");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("123.456.789-09"), "12345678909");
        assert_eq!(strip_separators("11.444.777/0001-61"), "11444777000161");
        assert_eq!(strip_separators(" 12 34 "), "1234");
        assert_eq!(strip_separators("1a2_3"), "1a2_3");
        assert_eq!(strip_separators(""), "");
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0129"), Some(vec![0, 1, 2, 9]));
        assert_eq!(parse_digits(""), Some(vec![]));
        assert_eq!(parse_digits("12a4"), None);
        assert_eq!(parse_digits("12-4"), None);
    }

    #[test]
    fn test_digits_to_string() {
        assert_eq!(digits_to_string(&[0, 1, 2, 9]), "0129");
        assert_eq!(digits_to_string(&[]), "");
    }

    #[test]
    fn test_all_equal() {
        assert!(all_equal(&[1, 1, 1]));
        assert!(all_equal(&[]));
        assert!(!all_equal(&[1, 1, 2]));
    }
}
