//! Locale-aware string ordering.
//!
//! Sorting follows the root collation order users expect from a browser's `localeCompare`, not
//! code point order. Strings compare on three levels:
//!
//! 1. base characters, case and accents ignored (whitespace < punctuation < digits < letters);
//! 2. accents, compared per base character;
//! 3. case, lower case before upper case.
//!
//! Strings that tie on all three levels are only equal if they are canonically equivalent.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Control,
}

fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_control() {
        CharClass::Control
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Punctuation
    }
}

//------------------------------------------------------------------------------
/// Precomputed sort key of one string, ordered the way [`compare`] orders the strings
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
    decomposed: String,
}

impl CollationKey {
    /// Builds the key for `text`
    pub fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();
        let mut key = Self::default();

        for ch in decomposed.chars() {
            if is_combining_mark(ch) {
                // a mark with no preceding base character carries no weight
                if let Some(marks) = key.secondary.last_mut() {
                    marks.push(ch);
                }
                continue;
            }

            let upper = ch.is_uppercase();
            if ch == 'ß' {
                key.push_base('s', upper);
                key.push_base('s', upper);
            } else {
                for folded in ch.to_lowercase() {
                    key.push_base(folded, upper);
                }
            }
        }

        key.decomposed = decomposed;
        key
    }

    fn push_base(&mut self, ch: char, upper: bool) {
        self.primary.push((classify(ch), ch));
        self.secondary.push(Vec::new());
        self.tertiary.push(upper);
    }
}

/// Compares two strings in collation order
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
