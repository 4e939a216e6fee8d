// src/sheet_ui/layout.rs - fixed-width layout helpers for printed sheets

/// Pads `text` to `width` characters, truncating with no ellipsis when it is
/// too long. Widths are character counts; roster text is expected to be plain
/// enough that this matches the printed width.
pub(super) fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

/// Centers `text` within `width` characters, leaving it untouched when it is
/// already wider.
pub(super) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_fills_and_truncates() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdef", 4), "abcd");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn test_center_positions_text() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 4), "abcdef");
    }
}
