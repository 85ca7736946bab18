//! Guess selection
//!
//! History-consistency filtering, Shannon-entropy scoring, and the
//! orchestration that turns a vocabulary plus a guess history into the
//! next guess.

mod engine;
mod error;
pub mod entropy;
mod filter;
mod selector;
mod strategy;

pub use engine::{DEFAULT_MAX_GUESSES, Solver};
pub use error::SolveError;
pub use filter::{consistent_candidates, is_consistent};
pub use selector::select_best_guess;
pub use strategy::{EntropyStrategy, GuessStrategy};
