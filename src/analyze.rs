//! Text analysis: raw text in, stemmed terms out.
//!
//! The pipeline is segmentation → lowercasing → stemming, and it is the same
//! for documents and queries. That symmetry is the whole trick of the index:
//! a query term can only hit a posting if both sides went through identical
//! analysis.
//!
//! Segmentation is deliberately blunt: a Unicode letter extends the current
//! token, anything else ends it. Digits and punctuation vanish, and a hyphen
//! splits its compound in two (`мир-2024` → `мир`). No stop words, no length
//! limits.
//!
//! [`analyze`] returns a lazy iterator so query parsing can stop after the
//! first token without paying for the rest of the string.

use crate::stem;

/// Analyze a string into an ordered sequence of stemmed terms.
///
/// Deterministic and side-effect free: the same input always yields the same
/// sequence.
///
/// ```
/// use poisk::analyze;
///
/// let terms: Vec<String> = analyze("Привет, мир-2024!").collect();
/// assert_eq!(terms, ["привет", "мир"]);
/// ```
pub fn analyze(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars(),
        exhausted: false,
    }
}

/// Lazy iterator over the stemmed terms of a string. Created by [`analyze`].
pub struct Tokens<'a> {
    chars: std::str::Chars<'a>,
    exhausted: bool,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let mut word: Vec<char> = Vec::new();
        for c in self.chars.by_ref() {
            if c.is_alphabetic() {
                // Full Unicode lowercase mapping; one-to-one for Cyrillic.
                word.extend(c.to_lowercase());
            } else if !word.is_empty() {
                return Some(stem::stem_chars(word));
            }
        }

        self.exhausted = true;
        if word.is_empty() {
            None
        } else {
            Some(stem::stem_chars(word))
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
