//! Dictionary word representation
//!
//! A Word stores the lowercase text along with its letter-code and
//! position-code decompositions, computed once at construction.

use super::code::{ALPHABET_SIZE, CodeSet, LetterCode, PositionSet, letter_index};
use std::fmt;

/// Longest word the position tables can describe
pub const MAX_WORD_LEN: usize = 10;

/// A dictionary word with cached letter-code decomposition
///
/// The letter codes of a word never change, so they are derived in
/// [`Word::new`] and reused by every scorer that sees the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
    codes: Vec<LetterCode>,
    code_set: CodeSet,
    position_set: PositionSet,
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
                write!(f, "Word must have 1 to {MAX_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or above [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use longwordle_ranker::core::Word;
    ///
    /// let word = Word::new("Abbot").unwrap();
    /// assert_eq!(word.text(), "abbot");
    ///
    /// let codes: Vec<String> = word.codes().iter().map(ToString::to_string).collect();
    /// assert_eq!(codes, ["a1", "b1", "b2", "o1", "t1"]);
    ///
    /// assert!(Word::new("far too long").is_err());
    /// assert!(Word::new("ab3").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        let mut first_seen: Vec<u8> = Vec::with_capacity(text.len());
        let mut position_set = PositionSet::new();

        for (position, letter) in text.bytes().enumerate() {
            let slot = &mut counts[letter_index(letter)];
            if *slot == 0 {
                first_seen.push(letter);
            }
            *slot += 1;
            position_set.insert_parts(letter, position);
        }

        // Letters in order of first appearance, each expanded to 1..=count
        let codes: Vec<LetterCode> = first_seen
            .iter()
            .flat_map(|&letter| {
                (1..=counts[letter_index(letter)]).map(move |n| LetterCode::from_parts(letter, n))
            })
            .collect();

        let code_set = codes.iter().copied().collect();

        Ok(Self {
            text,
            counts,
            codes,
            code_set,
            position_set,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, or `None` past the end of the word
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.text.as_bytes().get(position).copied()
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Letter codes in first-appearance order, e.g. `abbot` -> a1 b1 b2 o1 t1
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[LetterCode] {
        &self.codes
    }

    /// The same letter codes as a set
    #[inline]
    #[must_use]
    pub const fn code_set(&self) -> &CodeSet {
        &self.code_set
    }

    /// Every (letter, position) pair of the word
    #[inline]
    #[must_use]
    pub const fn position_set(&self) -> &PositionSet {
        &self.position_set
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
