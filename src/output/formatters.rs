//! Small formatting helpers shared by the CLI surfaces

use crate::core::RejectionReason;
use colored::Colorize;

/// One-line rendering of an accepted answer
#[must_use]
pub fn accepted_line(word: &str) -> String {
    format!("{} {}", "✓".bright_green().bold(), word.bright_white())
}

/// One-line rendering of a rejection, title and message included
#[must_use]
pub fn rejected_line(candidate: &str, reason: RejectionReason, base_word: &str) -> String {
    format!(
        "{} {} — {}: {}",
        "✗".bright_red().bold(),
        candidate.white(),
        reason.title().bright_red(),
        reason.message(base_word)
    )
}

/// "1 word" / "n words" counter
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}
