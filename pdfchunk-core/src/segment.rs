//! Punctuation-based sentence segmentation
//!
//! A sentence ends after `.`, `!` or `?` when whitespace follows. There is no
//! abbreviation handling: "Dr. Smith" is two sentences.

use regex::Regex;
use std::sync::LazyLock;

static TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("terminator pattern is valid"));

/// Lazy iterator over the sentences of a text
///
/// Yields trimmed, non-empty slices of the input in order.
#[derive(Debug, Clone)]
pub struct Sentences<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Sentences<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let piece = match TERMINATOR.find(rest) {
                Some(m) => {
                    // Terminators are single-byte ASCII; the split sits right after them.
                    let piece = &rest[..m.start() + 1];
                    self.pos += m.end();
                    piece
                }
                None => {
                    self.pos = self.text.len();
                    rest
                }
            };

            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        None
    }
}

/// Split `text` into sentences
///
/// ```
/// use pdfchunk_core::split_sentences;
///
/// let sentences: Vec<&str> = split_sentences("Hi there. How are you? Fine!").collect();
/// assert_eq!(sentences, vec!["Hi there.", "How are you?", "Fine!"]);
/// ```
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        split_sentences(text).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(collect("A. B. C. D."), vec!["A.", "B.", "C.", "D."]);
    }

    #[test]
    fn test_all_terminators() {
        assert_eq!(
            collect("Stop. Really? Yes! Done"),
            vec!["Stop.", "Really?", "Yes!", "Done"]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(collect("  no punctuation here  "), vec!["no punctuation here"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        assert_eq!(
            collect("Version 1.2.3 is out. See example.com now."),
            vec!["Version 1.2.3 is out.", "See example.com now."]
        );
    }

    #[test]
    fn test_repeated_terminators() {
        assert_eq!(collect("Wait... What?! Ok."), vec!["Wait...", "What?!", "Ok."]);
    }

    #[test]
    fn test_isolated_terminators_are_kept() {
        assert_eq!(collect("a. . b"), vec!["a.", ".", "b"]);
    }

    #[test]
    fn test_trailing_whitespace_after_last_terminator() {
        assert_eq!(collect("One. Two.   "), vec!["One.", "Two."]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(collect("").is_empty());
        assert!(collect("   ").is_empty());
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            collect("Café au lait. Naïve résumé!"),
            vec!["Café au lait.", "Naïve résumé!"]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "First one. Second one? Third one!";
        assert_eq!(collect(text), collect(text));
    }
}
