//! String utilities for the domain layer.

/// Take the first `max_chars` characters of a string (UTF-8 safe)
///
/// Unlike [`truncate`], the limit counts characters, not bytes, and no
/// ellipsis is appended.
pub fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ascii() {
        assert_eq!(preview("hello world", 5), "hello");
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("", 10), "");
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("héllo wörld", 7), "héllo w");
        assert_eq!(preview("日本語テスト", 3), "日本語");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each of these characters is 3 bytes: max_len=10 -> target=7 -> boundary at 6
        assert_eq!(truncate("日本語テスト", 10), "日本...");
        assert_eq!(truncate("日本語", 30), "日本語");
    }
}
