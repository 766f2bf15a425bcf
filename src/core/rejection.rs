//! Rejection reasons for refused answers
//!
//! A closed set of validation failures, each mapped to the title/message
//! pair the presentation layer shows the player.

use std::fmt;

/// Why a submitted answer was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The answer cannot be spelled from the base word's letters
    NotPossible,
    /// The answer was already accepted earlier in this puzzle
    AlreadyUsed,
    /// The answer is too short, is the base word itself, or is not a
    /// dictionary word
    NotReal,
}

impl RejectionReason {
    /// Dialog title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NotPossible => "Word not possible",
            Self::AlreadyUsed => "Word used already",
            Self::NotReal => "Word not recognised",
        }
    }

    /// Dialog message for this rejection
    ///
    /// `base_word` is interpolated into the `NotPossible` message.
    #[must_use]
    pub fn message(self, base_word: &str) -> String {
        match self {
            Self::NotPossible => format!("You can't spell that word from {base_word}"),
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotReal => "You can't just make them up!".to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::error::Error for RejectionReason {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_dialogs() {
        assert_eq!(RejectionReason::NotPossible.title(), "Word not possible");
        assert_eq!(RejectionReason::AlreadyUsed.title(), "Word used already");
        assert_eq!(RejectionReason::NotReal.title(), "Word not recognised");
    }

    #[test]
    fn not_possible_message_includes_base_word() {
        let msg = RejectionReason::NotPossible.message("silkworm");
        assert_eq!(msg, "You can't spell that word from silkworm");
    }

    #[test]
    fn fixed_messages_ignore_base_word() {
        assert_eq!(
            RejectionReason::AlreadyUsed.message("anything"),
            "Be more original!"
        );
        assert_eq!(
            RejectionReason::NotReal.message("anything"),
            "You can't just make them up!"
        );
    }

    #[test]
    fn display_is_the_title() {
        assert_eq!(
            format!("{}", RejectionReason::AlreadyUsed),
            "Word used already"
        );
    }
}
