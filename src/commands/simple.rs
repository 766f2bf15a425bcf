//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI

use crate::core::Puzzle;
use crate::engine::Validator;
use crate::output::formatters::{accepted_line, rejected_line, word_count};
use crate::spell::SpellCheck;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<C: SpellCheck, R: Rng + ?Sized>(
    checker: C,
    pool: &[String],
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Scramble - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the base word.");
    println!("Each answer must use the letters at most as often as they appear,");
    println!("must not repeat an earlier answer, and must be a real word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'list' to review answers\n");

    let validator = Validator::new(checker);
    let mut puzzle = validator.start_puzzle(pool, rng);

    print_base_word(&puzzle);

    loop {
        let input = get_user_input("Enter answer")?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                print_game_over(&puzzle);
                return Ok(());
            }
            "new" | "n" => {
                print_game_over(&puzzle);
                puzzle = validator.start_puzzle(pool, rng);
                print_base_word(&puzzle);
                continue;
            }
            "list" | "l" => {
                print_accepted(&puzzle);
                continue;
            }
            _ => {}
        }

        match validator.validate(&mut puzzle, &input) {
            Ok(accepted) => {
                println!(
                    "  {}   ({})\n",
                    accepted_line(&accepted.word),
                    word_count(puzzle.accepted().len())
                );
            }
            Err(reason) => {
                println!("  {}\n", rejected_line(&input, reason, puzzle.base_word()));
            }
        }
    }
}

fn print_base_word(puzzle: &Puzzle) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Your word: {}",
        puzzle.base_word().to_uppercase().bright_yellow().bold()
    );
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_accepted(puzzle: &Puzzle) {
    if puzzle.accepted().is_empty() {
        println!("  No words found yet.\n");
        return;
    }

    println!("  Words found so far:");
    for word in puzzle.accepted() {
        println!("    • {word}");
    }
    println!();
}

fn print_game_over(puzzle: &Puzzle) {
    println!(
        "\n{} from {}:",
        word_count(puzzle.accepted().len()).bright_green().bold(),
        puzzle.base_word().to_uppercase().bright_yellow()
    );
    for word in puzzle.accepted() {
        println!("  • {word}");
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
