//! Shannon entropy of feedback-pattern distributions
//!
//! A guess is worth guessing in proportion to how evenly it splits the
//! remaining solutions across feedback patterns. That spread is measured as
//! the Shannon entropy, in bits, of the pattern histogram the guess induces.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Calculate the expected information gain of a guess, in bits
///
/// Simulates the feedback `guess` would receive against every candidate,
/// counts how often each distinct pattern occurs, and applies
/// `H = -Σ p·log2(p)` over the buckets. A single candidate produces one
/// bucket with p = 1 and therefore exactly 0 bits; empty buckets never
/// exist, so the 0·log2(0) case never arises.
///
/// Cost is linear in the candidate count; scoring a whole vocabulary this
/// way is the dominant cost of a turn and is what [`select_best_guess`]
/// parallelizes.
///
/// [`select_best_guess`]: crate::solver::select_best_guess
///
/// # Examples
/// ```
/// use wordle_engine::core::Word;
/// use wordle_engine::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("aaaaa").unwrap();
/// let candidates = [Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two buckets of one candidate each: a perfect 1-bit split
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut pattern_counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for &candidate in candidates {
        *pattern_counts.entry(Feedback::of(guess, candidate)).or_insert(0) += 1;
    }

    shannon_entropy(&pattern_counts)
}

/// Shannon entropy of a pattern histogram
///
/// # Properties
/// - 0.0 for a certain outcome (one bucket holding everything)
/// - maximized by a uniform spread
/// - always within `[0, log2(buckets)]`
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn entropy_of(guess: &str, candidates: &[Word]) -> f64 {
        let refs: Vec<&Word> = candidates.iter().collect();
        calculate_entropy(&word(guess), &refs)
    }

    #[test]
    fn single_candidate_is_zero_bits() {
        for guess in ["soare", "zzzzz", "slate"] {
            let candidates = words(&["slate"]);
            let entropy = entropy_of(guess, &candidates);
            assert!(entropy.abs() < TOLERANCE);
        }
    }

    #[test]
    fn perfect_binary_split_is_one_bit() {
        let candidates = words(&["aaaaa", "bbbbb"]);
        let entropy = entropy_of("aaaaa", &candidates);
        assert!((entropy - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn all_candidates_same_pattern_is_zero_bits() {
        // ZZZZZ shares no letters with any candidate, so one all-absent bucket
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let entropy = entropy_of("zzzzz", &candidates);
        assert!(entropy.abs() < TOLERANCE);
    }

    #[test]
    fn entropy_is_order_invariant() {
        let forward = words(&["slate", "irate", "crate", "grate"]);
        let reversed = words(&["grate", "crate", "irate", "slate"]);

        let e1 = entropy_of("crane", &forward);
        let e2 = entropy_of("crane", &reversed);
        assert!((e1 - e2).abs() < TOLERANCE);
    }

    #[test]
    fn duplicate_candidates_merge_into_one_bucket() {
        // Two copies of the same candidate land in the same bucket, giving a
        // 2:1 split rather than three singleton buckets
        let candidates = words(&["aaaaa", "aaaaa", "bbbbb"]);
        let entropy = entropy_of("aaaaa", &candidates);

        let expected = -(2.0 / 3.0) * (2.0f64 / 3.0).log2() - (1.0 / 3.0) * (1.0f64 / 3.0).log2();
        assert!((entropy - expected).abs() < TOLERANCE);
    }

    #[test]
    fn entropy_bounded_by_log2_of_candidate_count() {
        let candidates = words(&["slate", "irate", "crate", "grate", "pride", "mound"]);
        let bound = (candidates.len() as f64).log2();

        for guess in ["soare", "crane", "aaaaa", "mound"] {
            let entropy = entropy_of(guess, &candidates);
            assert!(entropy >= 0.0);
            assert!(entropy <= bound + TOLERANCE);
        }
    }

    #[test]
    fn bound_reached_when_every_candidate_is_distinguished() {
        // AAAAA vs these two: win pattern vs all-absent, fully separated
        let candidates = words(&["aaaaa", "bbbbb"]);
        let entropy = entropy_of("aaaaa", &candidates);
        assert!((entropy - (candidates.len() as f64).log2()).abs() < TOLERANCE);
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        counts.insert(Feedback::from_digits(&[0, 0, 0, 0, 0]).unwrap(), 25);
        counts.insert(Feedback::from_digits(&[1, 0, 0, 0, 0]).unwrap(), 25);
        counts.insert(Feedback::from_digits(&[2, 0, 0, 0, 0]).unwrap(), 25);
        counts.insert(Feedback::from_digits(&[0, 1, 0, 0, 0]).unwrap(), 25);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn shannon_entropy_skew_loses_bits() {
        let patterns = [
            Feedback::from_digits(&[0, 0, 0, 0, 0]).unwrap(),
            Feedback::from_digits(&[1, 0, 0, 0, 0]).unwrap(),
        ];

        let mut uniform: FxHashMap<Feedback, usize> = FxHashMap::default();
        uniform.insert(patterns[0], 50);
        uniform.insert(patterns[1], 50);

        let mut skewed: FxHashMap<Feedback, usize> = FxHashMap::default();
        skewed.insert(patterns[0], 99);
        skewed.insert(patterns[1], 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }
}
