//! Wordle Engine
//!
//! A guess-selection engine for Wordle-style letter-guessing games, built on
//! Shannon entropy. Given a vocabulary and the history of guesses with their
//! letter feedback, the engine filters the space of still-possible solutions
//! and proposes the guess with the highest expected information gain.
//!
//! The engine is a pure library: it does no I/O, renders nothing, and holds
//! no state between calls. The surrounding game driver owns the word lists,
//! the turn loop, and the win/loss decision.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Feedback, Word};
//! use wordle_engine::solver::Solver;
//!
//! let vocabulary: Vec<Word> = ["soare", "crane", "slate", "irate"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let solver = Solver::default();
//!
//! // First guess: the fixed opening word.
//! let opening = solver.choose(&vocabulary, &[]).unwrap();
//! assert_eq!(opening.text(), "soare");
//!
//! // Feed back what the game reported and ask again.
//! let observed = Feedback::of(opening, &Word::new("irate").unwrap());
//! let history = vec![(opening.clone(), observed)];
//! let next = solver.choose(&vocabulary, &history).unwrap();
//! assert!(vocabulary.contains(next));
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;
