//! Selection-time failures

use std::fmt;

/// Error type for guess selection
///
/// Both variants signal caller-side problems, never internal state: the
/// engine performs no I/O, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Selection requested with no words to choose from
    EmptyVocabulary,
    /// No vocabulary word is consistent with the observed history, so the
    /// history must have been recorded against a different secret
    EmptySolutionSpace,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => write!(f, "vocabulary is empty"),
            Self::EmptySolutionSpace => {
                write!(f, "no vocabulary word is consistent with the guess history")
            }
        }
    }
}

impl std::error::Error for SolveError {}
