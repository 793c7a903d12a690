//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
///
/// Wide characters (Hangul, CJK, emoji) count as two columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Keeps the end of `text`, prefixing `…` when it does not fit.
///
/// Used for input lines, where the caret sits at the end of the value.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    let mut out = String::from("…");
    out.extend(kept.into_iter().rev());
    out
}

/// Replaces every character with a bullet.
pub fn mask(text: &str) -> String {
    "•".repeat(text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_long() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_chars() {
        // Each Hangul syllable is two columns wide.
        assert_eq!(truncate_with_ellipsis("요청 실패", 5), "요청…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start_with_ellipsis("abcdefgh", 4), "…fgh");
        assert_eq!(truncate_start_with_ellipsis("abc", 4), "abc");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask("비밀"), "••");
        assert_eq!(mask(""), "");
    }
}
