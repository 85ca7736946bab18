//! History-consistency filtering
//!
//! A candidate could still be the secret only if, standing in for the
//! solution, it would have produced exactly the feedback that was actually
//! observed for every guess so far. The filter re-derives each pattern with
//! the same algorithm the game uses, so the check is exact by construction.

use crate::core::{Feedback, Word};

/// Check whether `candidate` could be the solution given the history
///
/// Re-computes the feedback each historical guess would have received if
/// `candidate` were the secret and compares it to what was observed,
/// short-circuiting on the first mismatch. Vacuously true for an empty
/// history.
///
/// # Examples
/// ```
/// use wordle_engine::core::{Feedback, Word};
/// use wordle_engine::solver::is_consistent;
///
/// let secret = Word::new("irate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let history = vec![(guess.clone(), Feedback::of(&guess, &secret))];
///
/// assert!(is_consistent(&secret, &history));
/// assert!(!is_consistent(&Word::new("soare").unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[(Word, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, observed)| Feedback::of(guess, candidate) == *observed)
}

/// Filter the vocabulary down to words still consistent with the history
///
/// The result preserves vocabulary order; the history stays the source of
/// truth and the filter is recomputed from scratch each turn, so it never
/// has to be kept in sync incrementally.
#[must_use]
pub fn consistent_candidates<'a>(
    vocabulary: &'a [Word],
    history: &[(Word, Feedback)],
) -> Vec<&'a Word> {
    vocabulary
        .iter()
        .filter(|candidate| is_consistent(candidate, history))
        .collect()
}
