use crate::types::{StopwordSet, Term, TermSet};

/// Splits `text` into its distinct index terms.
///
/// Each character is lower-cased to a single character and every character outside `[a-z0-9]` becomes a
/// word boundary. With `stopword_removal` set, words in `stopwords` are
/// dropped. Never fails; text without letters or digits yields an empty set.
pub fn tokenize(text: &str, stopword_removal: bool, stopwords: &StopwordSet) -> TermSet {
    let normalized: String = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| !(stopword_removal && stopwords.contains(word)))
        .filter_map(|word| Term::try_from(word).ok())
        .collect()
}
