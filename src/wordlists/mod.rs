//! Word lists for the anagram game
//!
//! Provides the embedded start-word pool and dictionary compiled into the
//! binary, plus loading utilities for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

/// Base word used when no start-word pool is available
pub const FALLBACK_WORD: &str = "silkworm";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_eight_letter_lowercase() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_playable_length() {
        // Nothing shorter than the minimum answer length belongs here
        for &word in DICTIONARY {
            assert!(word.len() >= 3, "Word '{word}' is shorter than 3 letters");
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        // Every base word must itself be a real word
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &word in START_WORDS {
            assert!(
                dictionary.contains(&word),
                "Start word '{word}' missing from dictionary"
            );
        }
    }

    #[test]
    fn fallback_word_is_a_start_word() {
        assert!(START_WORDS.contains(&FALLBACK_WORD));
    }
}
