//! Small shared helpers

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Fit a string into `max_cols` terminal columns, appending an ellipsis
/// when it has to cut. Width-aware so wide glyphs don't overflow cells.
pub fn fit_width(s: &str, max_cols: usize) -> String {
    if s.width() <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    // Reserve one column for the ellipsis
    let budget = max_cols - 1;
    let mut cols = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if cols + w > budget {
            break;
        }
        cols += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_passes_short_strings_through() {
        assert_eq!(fit_width("hello", 10), "hello");
        assert_eq!(fit_width("hello", 5), "hello");
        assert_eq!(fit_width("", 3), "");
    }

    #[test]
    fn test_fit_width_truncates_with_ellipsis() {
        assert_eq!(fit_width("reservation", 8), "reserva…");
        assert_eq!(fit_width("ab", 1), "…");
    }

    #[test]
    fn test_fit_width_counts_wide_glyphs() {
        // Each CJK glyph is two columns; three of them don't fit in 5
        assert_eq!(fit_width("晚餐预订", 5), "晚餐…");
        assert_eq!(fit_width("晚餐", 4), "晚餐");
    }

    #[test]
    fn test_fit_width_zero_budget() {
        assert_eq!(fit_width("hello", 0), "");
    }
}
