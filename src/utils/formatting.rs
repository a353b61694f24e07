//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// First `max` characters of `s` (characters, not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Pad to a display width, counting wide characters as two columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Shorten to a display width with a trailing ellipsis.
pub fn ellipsize(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("Government-owned", 15), "Government-owne");
        assert_eq!(truncate_chars("Trivandrum", 20), "Trivandrum");
        assert_eq!(truncate_chars("àèìòù", 3), "àèì");
    }

    #[test]
    fn pad_and_ellipsize() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(ellipsize("abcdef", 4), "abc…");
        assert_eq!(ellipsize("abc", 4), "abc");
    }
}
