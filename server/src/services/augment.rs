//! Augmentation transforms: synonym replacement and random insertion.
//!
//! DESIGN
//! ======
//! Both transforms operate on whitespace-delimited words and leave the
//! rest of the text untouched. The RNG is injected so callers own the
//! randomness and tests can drive the transforms deterministically.

#[cfg(test)]
#[path = "augment_test.rs"]
mod augment_test;

use rand::Rng;
use wire::AugmentMode;

/// Word pairs used by [`synonym_replacement`]. Matched case-insensitively
/// against whole words.
const SYNONYMS: &[(&str, &str)] = &[
    ("example", "sample"),
    ("film", "movie"),
    ("good", "fine"),
    ("happy", "glad"),
    ("quick", "fast"),
    ("small", "little"),
    ("big", "large"),
    ("begin", "start"),
];

/// Apply an augmentation mode to `text`.
pub fn apply<R: Rng>(mode: AugmentMode, text: &str, rng: &mut R) -> String {
    match mode {
        AugmentMode::SynonymReplacement => synonym_replacement(text),
        AugmentMode::RandomInsertion => random_insertion(text, rng),
    }
}

/// Replace every word with a known synonym, leaving other words alone.
#[must_use]
pub fn synonym_replacement(text: &str) -> String {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|word| {
            SYNONYMS
                .iter()
                .find(|(from, _)| word.eq_ignore_ascii_case(from))
                .map_or(word, |(_, to)| *to)
        })
        .collect();
    words.join(" ")
}

/// Insert a word drawn from the text at a random position.
///
/// Empty input is returned unchanged since there is nothing to draw from.
pub fn random_insertion<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return text.to_owned();
    }
    let source = words[rng.random_range(0..words.len())];
    let position = rng.random_range(0..=words.len());
    words.insert(position, source);
    words.join(" ")
}
