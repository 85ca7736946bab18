//! Letter feedback patterns
//!
//! A `Feedback` is the per-position outcome of comparing a guess against a
//! solution: `Exact` (2), `Present` (1), or `Absent` (0) for each letter.
//! The numeric encoding is part of the stable interface — callers compare
//! patterns by value and sum the digits to detect an all-correct guess.

use super::{WORD_LEN, Word};
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Letter does not occur, or all its occurrences are already claimed
    Absent = 0,
    /// Letter occurs in the solution but at a different position
    Present = 1,
    /// Letter correct and in the correct position
    Exact = 2,
}

impl Symbol {
    /// The symbol's ordinal value (0, 1, or 2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Decode an ordinal, rejecting values outside {0, 1, 2}
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Feedback pattern for a full guess
///
/// One `Symbol` per letter position, in guess order. Hashable and compared
/// as a unit, so it serves directly as a histogram key when counting how a
/// guess partitions the remaining solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Symbol; WORD_LEN]);

/// Error type for malformed feedback supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Feedback length differs from the word length
    LengthMismatch { expected: usize, actual: usize },
    /// A digit outside {0, 1, 2}
    InvalidSymbol(u8),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "feedback must have {expected} symbols, got {actual}")
            }
            Self::InvalidSymbol(digit) => {
                write!(f, "feedback symbol must be 0, 1 or 2, got {digit}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All positions exact (winning pattern)
    pub const WIN: Self = Self([Symbol::Exact; WORD_LEN]);

    /// Calculate the feedback when `guess` is guessed and `solution` is the target
    ///
    /// Implements the game's exact duplicate-letter rules in two passes over
    /// a per-letter remaining-multiplicity map:
    ///
    /// 1. Exact pass: every position where guess and solution agree is
    ///    marked `Exact` and that letter's remaining count is decremented.
    /// 2. Present pass, left to right over the non-exact positions: a guess
    ///    letter with remaining count > 0 is marked `Present` and claims one
    ///    occurrence; otherwise the position is `Absent`.
    ///
    /// The left-to-right order matters: when a letter appears more often in
    /// the guess than in the solution, the leftmost unmatched occurrences
    /// claim `Present` and later ones fall through to `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let guess = Word::new("adieu").unwrap();
    /// let solution = Word::new("dials").unwrap();
    /// let feedback = Feedback::of(&guess, &solution);
    ///
    /// // A, D, I present but misplaced; E, U absent
    /// assert_eq!(feedback.digits(), [1, 1, 1, 0, 0]);
    /// ```
    #[must_use]
    pub fn of(guess: &Word, solution: &Word) -> Self {
        let mut symbols = [Symbol::Absent; WORD_LEN];
        let mut remaining = solution.letter_counts();

        // Exact pass: claim matched letters so they can't double as Present
        // Allow: index accesses guess[i], solution[i], and symbols[i] together
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letters()[i] == solution.letters()[i] {
                symbols[i] = Symbol::Exact;
                if let Some(count) = remaining.get_mut(&guess.letters()[i]) {
                    *count -= 1;
                }
            }
        }

        // Present pass, left to right over positions not already exact
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if symbols[i] == Symbol::Absent
                && let Some(count) = remaining.get_mut(&guess.letters()[i])
                && *count > 0
            {
                symbols[i] = Symbol::Present;
                *count -= 1;
            }
        }

        Self(symbols)
    }

    /// The per-position symbols, in guess order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; WORD_LEN] {
        &self.0
    }

    /// The pattern as ordinal digits, in guess order
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LEN] {
        self.0.map(Symbol::digit)
    }

    /// Sum of the ordinal digits
    ///
    /// An all-exact guess scores `2 * WORD_LEN`; callers use this to detect
    /// a win.
    #[must_use]
    pub fn score(self) -> u8 {
        self.0.iter().map(|s| s.digit()).sum()
    }

    /// Whether every position is `Exact`
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Decode a pattern from caller-supplied digits
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the slice is not exactly
    /// `WORD_LEN` long, or `FeedbackError::InvalidSymbol` for a digit
    /// outside {0, 1, 2}.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, FeedbackError};
    ///
    /// let feedback = Feedback::from_digits(&[0, 2, 1, 0, 0]).unwrap();
    /// assert_eq!(feedback.score(), 3);
    ///
    /// assert!(matches!(
    ///     Feedback::from_digits(&[0, 3, 0, 0, 0]),
    ///     Err(FeedbackError::InvalidSymbol(3))
    /// ));
    /// ```
    pub fn from_digits(digits: &[u8]) -> Result<Self, FeedbackError> {
        if digits.len() != WORD_LEN {
            return Err(FeedbackError::LengthMismatch {
                expected: WORD_LEN,
                actual: digits.len(),
            });
        }

        let mut symbols = [Symbol::Absent; WORD_LEN];
        for (i, &digit) in digits.iter().enumerate() {
            symbols[i] = Symbol::from_digit(digit).ok_or(FeedbackError::InvalidSymbol(digit))?;
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.digit())?;
        }
        Ok(())
    }
}
