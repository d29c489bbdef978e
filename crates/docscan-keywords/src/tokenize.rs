//! Word splitting and token acceptance.
//!
//! A word is a maximal run of Unicode alphanumerics, hyphens and apostrophes (`'` or `’`).
//! Hyphens and apostrophes at either end are trimmed and the word is lower-cased. Words
//! with an embedded apostrophe ("don't") or any non-ASCII letter ("café") survive
//! splitting but fail the shape check, so they are never tokens.

use crate::Stopwords;

/// Minimum token length, exclusive.
const MIN_LEN_EXCLUSIVE: usize = 2;

/// Splits text into lower-cased tokens, dropping everything that fails acceptance.
///
/// Order and repetition follow the input.
pub fn tokenize(text: &str, stopwords: &Stopwords) -> Vec<String> {
    words(text)
        .map(str::to_lowercase)
        .filter(|word| is_token(word, stopwords))
        .collect()
}

/// Checks the acceptance predicate for a lower-cased word.
pub fn is_token(word: &str, stopwords: &Stopwords) -> bool {
    word.len() > MIN_LEN_EXCLUSIVE
        && !stopwords.contains(word)
        && has_token_shape(word)
        && !word.bytes().all(|b| b.is_ascii_digit() || b == b'-')
}

/// Yields trimmed words in input order.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .map(|w| w.trim_matches(is_joiner))
        .filter(|w| !w.is_empty())
}

/// Characters that may appear inside a word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_joiner(c)
}

/// Hyphens and apostrophes.
fn is_joiner(c: char) -> bool {
    matches!(c, '-' | '\'' | '\u{2019}')
}

/// `^[a-z][a-z0-9-]*$`.
fn has_token_shape(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
