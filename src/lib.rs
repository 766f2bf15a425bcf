//! Word Scramble
//!
//! An anagram game: make words from the letters of a random base word.
//! Every answer must be spellable from the base word's letters, unused so
//! far, and a real dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Puzzle;
//! use word_scramble::engine::Validator;
//! use word_scramble::spell::DictionaryChecker;
//!
//! let validator = Validator::new(DictionaryChecker::from_words(["silk", "worm"]));
//! let mut puzzle = Puzzle::new("silkworm");
//!
//! // Answers are compared case-insensitively and recorded newest-first
//! validator.validate(&mut puzzle, "Silk").unwrap();
//! validator.validate(&mut puzzle, "worm").unwrap();
//! assert_eq!(puzzle.accepted(), &["worm", "silk"]);
//! ```

// Core domain types
pub mod core;

// Answer validation
pub mod engine;

// Spell checking boundary
pub mod spell;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
