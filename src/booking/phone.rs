// Progressive phone number mask
//
// Reformats US-style numbers as the guest types: (555) 123-4567. The mask
// runs on every keystroke, so it has to accept its own output unchanged
// and cap the number at ten digits.

/// Strip everything but ASCII digits.
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Format a partially-typed phone number.
///
/// Stages by digit count: empty, `(555`, `(555) 123`, `(555) 123-4567`.
/// Digits past the tenth are dropped from the display.
pub fn format_progressive(value: &str) -> String {
    let all = digits(value);
    // Digits are ASCII, so byte slicing is safe here
    let d = &all[..all.len().min(10)];
    match d.len() {
        0 => String::new(),
        1..=3 => format!("({}", d),
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_strips_formatting() {
        assert_eq!(digits("(555) 123-4567"), "5551234567");
        assert_eq!(digits("+1 555.123.4567"), "15551234567");
        assert_eq!(digits("no digits"), "");
    }

    #[test]
    fn test_format_stages() {
        assert_eq!(format_progressive(""), "");
        assert_eq!(format_progressive("5"), "(5");
        assert_eq!(format_progressive("555"), "(555");
        assert_eq!(format_progressive("5551"), "(555) 1");
        assert_eq!(format_progressive("555123"), "(555) 123");
        assert_eq!(format_progressive("5551234"), "(555) 123-4");
        assert_eq!(format_progressive("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_discards_past_ten_digits() {
        assert_eq!(format_progressive("55512345678901"), "(555) 123-4567");
    }

    #[test]
    fn test_format_is_idempotent() {
        for raw in ["5", "555", "5551", "555123", "5551234567"] {
            let once = format_progressive(raw);
            assert_eq!(format_progressive(&once), once);
        }
    }

    #[test]
    fn test_format_ignores_non_digit_input() {
        assert_eq!(format_progressive("abc"), "");
        assert_eq!(format_progressive("(555) abc 123"), "(555) 123");
    }
}
