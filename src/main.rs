//! Word Scramble - CLI
//!
//! Anagram word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::{
    commands::{check_words, run_simple},
    interactive::{App, run_tui},
    output::print_check_result,
    spell::DictionaryChecker,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, pool_or_fallback, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Anagram word game: make words from the letters of a random base word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for deterministic base-word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check answers against a base word
    Check {
        /// The base word to spell answers from
        base_word: String,

        /// Candidate answers, validated in order
        #[arg(required = true)]
        candidates: Vec<String>,
    },
}

/// Load the start-word pool based on the -w flag
///
/// "embedded" uses the compiled-in pool; anything else is a file path.
/// An empty pool degrades to the fallback word rather than failing.
fn load_pool(wordlist_mode: &str) -> Result<Vec<String>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(START_WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };
    Ok(pool_or_fallback(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_pool(&cli.wordlist)?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(DictionaryChecker::new(), &pool, rng);
            run_tui(app)
        }
        Commands::Simple => {
            run_simple(DictionaryChecker::new(), &pool, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check {
            base_word,
            candidates,
        } => {
            let result = check_words(&base_word, &candidates, DictionaryChecker::new());
            print_check_result(&result);
            Ok(())
        }
    }
}
