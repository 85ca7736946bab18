//! Entropy-maximizing guess selection
//!
//! Scoring is data-parallel (every word's entropy is independent), but the
//! winner is reduced sequentially over the original pool order with a strict
//! greater-than comparison, so ties always go to the first-listed word no
//! matter how the parallel work was scheduled.

use super::entropy::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select the guess with the highest entropy against the candidates
///
/// Returns the winning word and its entropy, or `None` for an empty pool.
/// Ties break to the earliest word in pool order, making the result
/// deterministic for a given pool ordering.
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::select_best_guess;
///
/// let pool = [Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let candidates = [
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let pool_refs: Vec<&Word> = pool.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    // Score in parallel, collect in pool order
    let scores: Vec<f64> = pool
        .par_iter()
        .map(|guess| calculate_entropy(guess, candidates))
        .collect();

    // Sequential reduce: first strictly-greater score wins
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(i, score)| (pool[i], score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn best_text(pool: &[Word], candidates: &[Word]) -> Option<String> {
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();
        select_best_guess(&pool_refs, &candidate_refs).map(|(w, _)| w.text().to_string())
    }

    #[test]
    fn selects_highest_entropy_word() {
        let pool = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        // AEROS distinguishes candidates far better than AAAAA
        assert_eq!(best_text(&pool, &candidates).unwrap(), "aeros");
    }

    #[test]
    fn ties_go_to_first_in_pool_order() {
        // One candidate means every guess scores exactly 0 bits
        let candidates = words(&["ccccc"]);

        let pool = words(&["aaaaa", "bbbbb"]);
        assert_eq!(best_text(&pool, &candidates).unwrap(), "aaaaa");

        // Reversing the pool flips the winner, proving order dependence
        let reversed = words(&["bbbbb", "aaaaa"]);
        assert_eq!(best_text(&reversed, &candidates).unwrap(), "bbbbb");
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let pool = words(&["soare", "crane", "slate", "aaaaa"]);
        let candidates = words(&["irate", "crate", "grate", "pride"]);

        let first = best_text(&pool, &candidates);
        for _ in 0..5 {
            assert_eq!(best_text(&pool, &candidates), first);
        }
    }

    #[test]
    fn empty_pool_returns_none() {
        let candidates = words(&["slate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();
        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }

    #[test]
    fn reported_entropy_matches_calculator() {
        let pool = words(&["crane"]);
        let candidates = words(&["slate", "irate"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (_, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
        assert!((entropy - calculate_entropy(&pool[0], &candidate_refs)).abs() < 1e-12);
    }
}
