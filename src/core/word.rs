//! Fixed-length game words
//!
//! A `Word` is a validated, case-normalized sequence of `WORD_LEN` ASCII
//! letters. Validation happens once at construction so the feedback and
//! scoring code never has to re-check lengths or alphabets.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every legal word.
pub const WORD_LEN: usize = 5;

/// A 5-letter word, lowercase, ASCII alphabetic only
///
/// Immutable once constructed. The byte view is what the feedback algorithm
/// iterates over; the text is kept for display and caller round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new `Word` from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly `WORD_LEN` ASCII
    /// alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("SOARE").unwrap();
    /// assert_eq!(word.text(), "soare");
    ///
    /// assert!(Word::new("short").is_ok());
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("s0are").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Remaining-multiplicity map of each letter in the word
    ///
    /// The feedback algorithm decrements these counts as letters are
    /// claimed by exact and present matches.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
