/// Significant digits kept by [`format_phone`].
pub const PHONE_DIGITS: usize = 10;

/// Re-renders a phone input as the user types: `(555`, `(555) 123`,
/// `(555) 123-4567`. Non-digits are dropped and anything past ten digits is
/// truncated.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progressive_rendering() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("5"), "(5");
        assert_eq!(format_phone("555"), "(555");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("555123"), "(555) 123");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_truncates_past_ten_digits() {
        assert_eq!(format_phone("555123456789"), "(555) 123-4567");
        assert_eq!(format_phone("+1 555 123 4567"), "(155) 512-3456");
    }

    #[test]
    fn test_idempotent_on_formatted_input() {
        for formatted in ["(5", "(555) 12", "(555) 123-4567"] {
            assert_eq!(format_phone(formatted), formatted);
            assert_eq!(format_phone(&format_phone(formatted)), formatted);
        }
    }

    #[test]
    fn test_backspace_over_separator() {
        // Deleting the ")" of "(555) 1" leaves "(555 1", which re-renders.
        assert_eq!(format_phone("(555 1"), "(555) 1");
    }
}
