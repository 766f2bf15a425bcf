//! Dictionary-backed spell checker
//!
//! Hash-set membership over a word list. The default instance uses the
//! embedded English dictionary; custom word sets are supported for bigger
//! dictionaries and for tests.

use super::{LANGUAGE_EN, SpellCheck};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Spell checker backed by an in-memory word set
///
/// Lookup is case-insensitive; the set stores lowercase forms.
#[derive(Debug, Clone)]
pub struct DictionaryChecker {
    words: FxHashSet<String>,
}

impl DictionaryChecker {
    /// Checker over the embedded English dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::from_words(DICTIONARY.iter().copied())
    }

    /// Checker over a custom word set
    ///
    /// # Examples
    /// ```
    /// use word_scramble::spell::{DictionaryChecker, SpellCheck};
    ///
    /// let checker = DictionaryChecker::from_words(["silk", "worm"]);
    /// assert!(checker.is_real_word("SILK", "en"));
    /// assert!(!checker.is_real_word("slkw", "en"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for DictionaryChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellCheck for DictionaryChecker {
    fn is_real_word(&self, token: &str, language: &str) -> bool {
        if language != LANGUAGE_EN {
            return false;
        }
        self.words.contains(&token.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_recognizes_common_words() {
        let checker = DictionaryChecker::new();
        assert!(checker.is_real_word("silk", "en"));
        assert!(checker.is_real_word("worm", "en"));
        assert!(checker.is_real_word("listen", "en"));
    }

    #[test]
    fn embedded_dictionary_rejects_gibberish() {
        let checker = DictionaryChecker::new();
        assert!(!checker.is_real_word("slkwrm", "en"));
        assert!(!checker.is_real_word("zzz", "en"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let checker = DictionaryChecker::from_words(["silk"]);
        assert!(checker.is_real_word("silk", "en"));
        assert!(checker.is_real_word("Silk", "en"));
        assert!(checker.is_real_word("SILK", "en"));
    }

    #[test]
    fn unknown_language_is_always_misspelled() {
        let checker = DictionaryChecker::from_words(["silk"]);
        assert!(!checker.is_real_word("silk", "fi"));
        assert!(!checker.is_real_word("silk", ""));
    }

    #[test]
    fn custom_word_set_is_lowercased() {
        let checker = DictionaryChecker::from_words(["SILK", "Worm"]);
        assert!(checker.is_real_word("silk", "en"));
        assert!(checker.is_real_word("worm", "en"));
        assert_eq!(checker.len(), 2);
    }

    #[test]
    fn empty_dictionary_rejects_everything() {
        let checker = DictionaryChecker::from_words(std::iter::empty::<&str>());
        assert!(checker.is_empty());
        assert!(!checker.is_real_word("silk", "en"));
    }
}
