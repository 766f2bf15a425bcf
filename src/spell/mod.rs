//! Spell checking boundary
//!
//! The engine only needs one question answered: "is this token a correctly
//! spelled word in language L?". The trait keeps that boolean contract so
//! the dictionary behind it can be swapped without touching validation.

mod dictionary;

pub use dictionary::DictionaryChecker;

/// The only language code the shipped dictionary understands
pub const LANGUAGE_EN: &str = "en";

/// Capability for checking whether a token is a real word
pub trait SpellCheck {
    /// True iff `token` is a correctly spelled word in `language`
    ///
    /// Implementations must treat the token case-insensitively and return
    /// false for any language they have no dictionary for.
    fn is_real_word(&self, token: &str, language: &str) -> bool;
}

impl<T: SpellCheck + ?Sized> SpellCheck for &T {
    fn is_real_word(&self, token: &str, language: &str) -> bool {
        (**self).is_real_word(token, language)
    }
}
