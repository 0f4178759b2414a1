//! Whitespace cleanup for extracted page text
//!
//! Extractors emit line breaks at layout positions rather than sentence
//! positions, so every run of whitespace (including `\r` and `\n`) is folded
//! into a single space. The scan is a single linear pass.

/// Collapse all whitespace runs into single spaces and trim both ends
///
/// ```
/// use pdfchunk_core::normalize;
///
/// assert_eq!(normalize("  Hello,\r\n  world.\n\n"), "Hello, world.");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Number of characters (Unicode scalar values) in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
