//! Core domain types for the guessing game
//!
//! Pure, dependency-light types: fixed-length words and the three-valued
//! letter feedback a guess receives against a solution.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Symbol};
pub use word::{WORD_LEN, Word, WordError};
