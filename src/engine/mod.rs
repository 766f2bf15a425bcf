//! Word validation engine
//!
//! Decides whether a submitted answer is acceptable for the current puzzle
//! and records it when it is.

mod validator;

pub use validator::{Accepted, MIN_ANSWER_LEN, Validator, is_derivable};
