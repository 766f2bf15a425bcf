//! Display functions for command results

use super::formatters::{accepted_line, rejected_line, word_count};
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of checking candidates against a base word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Base word: {}",
        result.base_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for attempt in &result.attempts {
        match &attempt.verdict {
            Ok(accepted) => println!("  {}", accepted_line(&accepted.word)),
            Err(reason) => println!(
                "  {}",
                rejected_line(&attempt.candidate, *reason, &result.base_word)
            ),
        }
    }

    let accepted = result
        .attempts
        .iter()
        .filter(|a| a.verdict.is_ok())
        .count();
    println!(
        "\n{} accepted out of {}\n",
        word_count(accepted),
        result.attempts.len()
    );
}
