//! Text normalization and term counting.

use std::collections::HashMap;

/// Count term occurrences in a piece of text.
///
/// Normalization is deliberately blunt: lowercase, then replace every
/// character outside `[a-z0-9 ]` with a space, then split on whitespace.
/// Punctuation, accents, and symbols all become separators. The same
/// function is applied to documents and queries, which is what makes the
/// two comparable.
#[must_use]
pub fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts = HashMap::new();
    for term in normalized.split_whitespace() {
        *counts.entry(term.to_string()).or_insert(0) += 1;
    }
    counts
}
