//! One-shot answer checking
//!
//! Validates candidates against an explicit base word, in order, against a
//! single puzzle, so duplicate submissions surface as `AlreadyUsed` just
//! like they would mid-game.

use crate::core::{Puzzle, RejectionReason};
use crate::engine::{Accepted, Validator};
use crate::spell::SpellCheck;

/// Result of checking candidates against a base word
pub struct CheckResult {
    pub base_word: String,
    pub attempts: Vec<CheckAttempt>,
}

/// Verdict for a single candidate
pub struct CheckAttempt {
    pub candidate: String,
    pub verdict: Result<Accepted, RejectionReason>,
}

/// Check candidates against a base word, sequentially
///
/// Earlier accepted candidates count as used for later ones.
pub fn check_words<C: SpellCheck>(
    base_word: &str,
    candidates: &[String],
    checker: C,
) -> CheckResult {
    let validator = Validator::new(checker);
    let mut puzzle = Puzzle::new(base_word);

    let attempts = candidates
        .iter()
        .map(|candidate| CheckAttempt {
            candidate: candidate.clone(),
            verdict: validator.validate(&mut puzzle, candidate),
        })
        .collect();

    CheckResult {
        base_word: puzzle.base_word().to_string(),
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::DictionaryChecker;

    fn checker() -> DictionaryChecker {
        DictionaryChecker::from_words(["silk", "worm", "milk"])
    }

    #[test]
    fn check_reports_verdict_per_candidate() {
        let candidates: Vec<String> = ["silk", "quartz", "sik"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let result = check_words("silkworm", &candidates, checker());

        assert_eq!(result.base_word, "silkworm");
        assert_eq!(result.attempts.len(), 3);
        assert!(result.attempts[0].verdict.is_ok());
        assert_eq!(
            result.attempts[1].verdict,
            Err(RejectionReason::NotPossible)
        );
        assert_eq!(result.attempts[2].verdict, Err(RejectionReason::NotReal));
    }

    #[test]
    fn check_candidates_share_one_puzzle() {
        let candidates: Vec<String> = ["silk", "silk"].iter().map(ToString::to_string).collect();

        let result = check_words("silkworm", &candidates, checker());

        assert!(result.attempts[0].verdict.is_ok());
        assert_eq!(
            result.attempts[1].verdict,
            Err(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn check_lowercases_the_base_word() {
        let result = check_words("SILKWORM", &[], checker());
        assert_eq!(result.base_word, "silkworm");
    }
}
