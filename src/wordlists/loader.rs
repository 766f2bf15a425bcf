//! Word list loading utilities
//!
//! Loads newline-delimited word lists from files and applies the fallback
//! pool when a list comes up empty.

use super::FALLBACK_WORD;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Each line is trimmed; blank lines are skipped and words are lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word list
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Replace an empty pool with the single-word fallback
///
/// A missing or empty start resource never fails the game; it degrades to
/// the fallback word.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::pool_or_fallback;
///
/// assert_eq!(pool_or_fallback(vec![]), vec!["silkworm".to_string()]);
/// ```
#[must_use]
pub fn pool_or_fallback(words: Vec<String>) -> Vec<String> {
    if words.is_empty() {
        vec![FALLBACK_WORD.to_string()]
    } else {
        words
    }
}
