//! Answer validation
//!
//! The engine applies three checks in a fixed order, because the order
//! picks which rejection the player sees: derivability, then originality,
//! then realness. On success the lowercase answer is recorded at the front
//! of the puzzle's accepted list; on failure the puzzle is untouched.

use crate::core::{Puzzle, RejectionReason};
use crate::spell::{LANGUAGE_EN, SpellCheck};
use crate::wordlists::FALLBACK_WORD;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Shortest answer the realness check allows
pub const MIN_ANSWER_LEN: usize = 3;

/// A successfully recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized (lowercase) form that was recorded
    pub word: String,
}

/// Validation engine for the anagram game
///
/// A stateless service over an injected [`Puzzle`]: callers own the puzzle
/// and hand it in mutably, so validating without an active puzzle is not
/// representable.
pub struct Validator<C: SpellCheck> {
    checker: C,
}

impl<C: SpellCheck> Validator<C> {
    /// Create a validator over the given spell checker
    pub const fn new(checker: C) -> Self {
        Self { checker }
    }

    /// Start a new puzzle with a base word drawn uniformly from `pool`
    ///
    /// An empty pool falls back to `"silkworm"` rather than failing.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::engine::Validator;
    /// use word_scramble::spell::DictionaryChecker;
    ///
    /// let validator = Validator::new(DictionaryChecker::from_words(["silk"]));
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let puzzle = validator.start_puzzle(&[], &mut rng);
    /// assert_eq!(puzzle.base_word(), "silkworm");
    /// ```
    pub fn start_puzzle<R: Rng + ?Sized>(&self, pool: &[String], rng: &mut R) -> Puzzle {
        let base_word = pool.choose(rng).map_or(FALLBACK_WORD, String::as_str);
        Puzzle::new(base_word)
    }

    /// Validate a submitted answer against the puzzle
    ///
    /// The candidate is compared in lowercase form. Checks run in order:
    /// derivability ([`RejectionReason::NotPossible`]), originality
    /// ([`RejectionReason::AlreadyUsed`]), realness
    /// ([`RejectionReason::NotReal`]); the first failure is reported. On
    /// success the lowercase answer is inserted at the front of the
    /// accepted list, the engine's only side effect.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] for the first failed check. The
    /// puzzle is left unmodified on rejection.
    pub fn validate(
        &self,
        puzzle: &mut Puzzle,
        candidate: &str,
    ) -> Result<Accepted, RejectionReason> {
        let answer = candidate.to_lowercase();

        if !is_derivable(puzzle.base_word(), &answer) {
            return Err(RejectionReason::NotPossible);
        }

        if puzzle.has_accepted(&answer) {
            return Err(RejectionReason::AlreadyUsed);
        }

        if !self.is_real(puzzle, &answer) {
            return Err(RejectionReason::NotReal);
        }

        puzzle.record(answer.clone());
        Ok(Accepted { word: answer })
    }

    /// Realness: long enough, not the base word, and in the dictionary
    fn is_real(&self, puzzle: &Puzzle, answer: &str) -> bool {
        answer.chars().count() >= MIN_ANSWER_LEN
            && answer != puzzle.base_word()
            && self.checker.is_real_word(answer, LANGUAGE_EN)
    }
}

/// Whether `candidate` can be spelled from `base_word`'s letters
///
/// Multiset containment: each candidate letter consumes one occurrence
/// from the base word's letter budget, and no letter may be consumed more
/// times than it appears. Both inputs are expected lowercase. The empty
/// candidate is vacuously derivable.
///
/// # Examples
/// ```
/// use word_scramble::engine::is_derivable;
///
/// assert!(is_derivable("listen", "tin"));
/// assert!(!is_derivable("listen", "tinn")); // only one 'n' available
/// ```
#[must_use]
pub fn is_derivable(base_word: &str, candidate: &str) -> bool {
    let mut budget: FxHashMap<char, usize> = FxHashMap::default();
    for letter in base_word.chars() {
        *budget.entry(letter).or_insert(0) += 1;
    }

    for letter in candidate.chars() {
        match budget.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}
