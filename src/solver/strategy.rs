//! Guess selection strategies
//!
//! The strategy seam lets a driver configure how the pool is scored without
//! the engine knowing which policy is in play.

use super::selector::select_best_guess;
use crate::core::Word;

/// A policy for picking one guess out of a pool
///
/// `pool` is the set of words the strategy may return (already chosen by
/// the engine — the whole vocabulary early on, the surviving candidates on
/// the final turn); `candidates` is the set of still-possible solutions the
/// guess will be scored against.
pub trait GuessStrategy {
    /// Select a guess from the pool, or `None` if the pool is empty
    fn select_guess<'a>(&self, pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word>;
}

/// Entropy maximization: the guess that most evenly partitions the
/// remaining solutions across feedback patterns wins
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl GuessStrategy for EntropyStrategy {
    fn select_guess<'a>(&self, pool: &[&'a Word], candidates: &[&Word]) -> Option<&'a Word> {
        select_best_guess(pool, candidates).map(|(best, _)| best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn entropy_strategy_returns_pool_member() {
        let pool = words(&["soare", "crane"]);
        let candidates = words(&["irate", "crate", "grate"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let chosen = EntropyStrategy
            .select_guess(&pool_refs, &candidate_refs)
            .unwrap();
        assert!(pool.contains(chosen));
    }

    #[test]
    fn entropy_strategy_empty_pool_is_none() {
        let candidates = words(&["irate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(EntropyStrategy.select_guess(&[], &candidate_refs).is_none());
    }
}
