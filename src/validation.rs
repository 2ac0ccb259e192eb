//! Input validation: word-length bounds, alphabetic content, the multiset-subset
//! rule and play-again tokens.
//!
//! Everything here is pure. Inputs are expected to be lowercased already.

use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::i18n::LanguageRegistry;
use std::collections::HashMap;

/// Answer to the play-again prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartAnswer {
    Yes,
    No,
}

impl RestartAnswer {
    /// Parse a lowercased response. Tokens of every registered language are
    /// accepted, whichever language the game is being played in.
    pub fn parse(response: &str) -> Option<RestartAnswer> {
        let registry = LanguageRegistry::get();
        if registry.is_yes_token(response) {
            Some(RestartAnswer::Yes)
        } else if registry.is_no_token(response) {
            Some(RestartAnswer::No)
        } else {
            None
        }
    }
}

/// Check a candidate original word: alphabetic only, 8 to 30 characters.
pub fn validate_original_word(word: &str) -> bool {
    let length = word.chars().count();
    !word.is_empty()
        && (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
        && word.chars().all(char::is_alphabetic)
}

/// Check that every character of `candidate` occurs in `original` at least as
/// many times as it occurs in `candidate`.
pub fn is_subset_word(candidate: &str, original: &str) -> bool {
    let available = letter_counts(original);
    letter_counts(candidate)
        .into_iter()
        .all(|(letter, needed)| available.get(&letter).copied().unwrap_or(0) >= needed)
}

/// Check a turn word: non-empty, built from the original's letters, not used yet.
pub fn is_valid_turn(input: &str, original: &str, used_words: &[String]) -> bool {
    !input.is_empty()
        && is_subset_word(input, original)
        && !used_words.iter().any(|used| used == input)
}

/// Check a play-again response against the yes/no tokens of every language.
pub fn is_valid_restart_response(response: &str) -> bool {
    LanguageRegistry::get()
        .restart_tokens()
        .iter()
        .any(|token| *token == response)
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}
