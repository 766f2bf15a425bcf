//! Core domain types for the anagram game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and directly testable.

mod puzzle;
mod rejection;

pub use puzzle::Puzzle;
pub use rejection::RejectionReason;
