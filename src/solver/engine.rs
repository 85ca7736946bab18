//! Next-guess orchestration
//!
//! Ties the filter, the entropy scorer, and the opening-word policy together
//! into the one call a game driver needs: history in, next guess out. The
//! engine holds only configuration; every call is a pure function of the
//! vocabulary and history it is handed.

use super::error::SolveError;
use super::filter::consistent_candidates;
use super::strategy::{EntropyStrategy, GuessStrategy};
use crate::core::{Feedback, Word};
use log::debug;

/// Default total-attempts budget of the standard game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Opening word used when no history exists
///
/// Chosen offline for high expected entropy over the standard solution
/// list; never recomputed at runtime.
const DEFAULT_OPENING: &str = "soare";

/// Next-guess selector
///
/// Configured once with a strategy, an opening word, and a guess budget,
/// then queried per turn via [`choose`]. Stateless between calls: the
/// caller-supplied history is the only source of truth, so repeating a call
/// with the same inputs always yields the same guess.
///
/// [`choose`]: Solver::choose
pub struct Solver<S: GuessStrategy = EntropyStrategy> {
    strategy: S,
    opening: Word,
    max_guesses: usize,
}

impl<S: GuessStrategy> Solver<S> {
    /// Create a solver with an explicit strategy, opening word, and budget
    ///
    /// `max_guesses` is the game's total-attempts budget; the engine scores
    /// the full vocabulary on every turn except the last one, where the
    /// guess must itself be a possible solution.
    pub const fn new(strategy: S, opening: Word, max_guesses: usize) -> Self {
        Self {
            strategy,
            opening,
            max_guesses,
        }
    }

    /// Choose the next guess for the given vocabulary and history
    ///
    /// - No history: the configured opening word, looked up in the
    ///   vocabulary (falls back to entropy scoring if the opener is not a
    ///   legal guess — the membership contract outranks the fixed opener).
    /// - One consistent candidate left: that word, no scoring needed.
    /// - Otherwise: the highest-entropy word from the turn's pool, ties
    ///   going to the earliest word in pool order.
    ///
    /// The returned reference is always a member of `vocabulary`.
    ///
    /// # Errors
    /// - `SolveError::EmptyVocabulary` if `vocabulary` has no words.
    /// - `SolveError::EmptySolutionSpace` if no vocabulary word is
    ///   consistent with `history`, which means the history was recorded
    ///   against a different secret; the engine surfaces this rather than
    ///   guessing around it.
    pub fn choose<'a>(
        &self,
        vocabulary: &'a [Word],
        history: &[(Word, Feedback)],
    ) -> Result<&'a Word, SolveError> {
        if vocabulary.is_empty() {
            return Err(SolveError::EmptyVocabulary);
        }

        if history.is_empty() {
            if let Some(opening) = vocabulary.iter().find(|w| **w == self.opening) {
                return Ok(opening);
            }
            debug!("opening word {} not in vocabulary, scoring instead", self.opening);
            let everything: Vec<&Word> = vocabulary.iter().collect();
            return self
                .strategy
                .select_guess(&everything, &everything)
                .ok_or(SolveError::EmptyVocabulary);
        }

        let candidates = consistent_candidates(vocabulary, history);
        debug!(
            "{} of {} words consistent after {} guesses",
            candidates.len(),
            vocabulary.len(),
            history.len()
        );

        if candidates.is_empty() {
            return Err(SolveError::EmptySolutionSpace);
        }

        // A lone survivor is provably the best possible guess
        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }

        // Probe with the whole vocabulary while a wasted guess is still
        // recoverable; the final attempt must itself be a possible solution
        let final_turn = history.len() + 1 >= self.max_guesses;
        let pool: Vec<&Word> = if final_turn {
            candidates.clone()
        } else {
            vocabulary.iter().collect()
        };

        self.strategy
            .select_guess(&pool, &candidates)
            .ok_or(SolveError::EmptySolutionSpace)
    }
}

impl Default for Solver<EntropyStrategy> {
    fn default() -> Self {
        let opening = Word::new(DEFAULT_OPENING).expect("default opening word is valid");
        Self::new(EntropyStrategy, opening, DEFAULT_MAX_GUESSES)
    }
}
