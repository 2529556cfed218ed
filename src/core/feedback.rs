//! Per-letter guess feedback
//!
//! Each letter of a guess gets one of three verdicts:
//! - 0 = Absent (letter not in target)
//! - 1 = Present (letter in target, wrong position)
//! - 2 = Correct (letter in target, right position)

use std::fmt;
use std::str::FromStr;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Parse one feedback symbol
    ///
    /// Accepts digits `0`/`1`/`2`, letters `b`/`x`/`y`/`g` (any case),
    /// `-`/`_` for absent, and the usual square emoji.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            '0' | '-' | '_' | 'b' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            '1' | 'y' | '🟨' => Some(Self::Present),
            '2' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Whether the letter counts toward inclusion (present or correct)
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Empty,
    InvalidSymbol { symbol: char, index: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Feedback must not be empty"),
            Self::InvalidSymbol { symbol, index } => {
                write!(f, "Invalid feedback symbol '{symbol}' at position {index}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, one verdict per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    #[must_use]
    pub const fn new(verdicts: Vec<Feedback>) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Feedback] {
        &self.0
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl FromStr for FeedbackPattern {
    type Err = FeedbackError;

    /// Parse a pattern from a string like "2100012001" or "GY-GY"
    ///
    /// # Examples
    /// ```
    /// use longwordle_ranker::core::{Feedback, FeedbackPattern};
    ///
    /// let p1: FeedbackPattern = "gy-".parse().unwrap();
    /// let p2: FeedbackPattern = "210".parse().unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.verdicts()[1], Feedback::Present);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FeedbackError::Empty);
        }

        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                Feedback::from_char(symbol).ok_or(FeedbackError::InvalidSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            let digit = match verdict {
                Feedback::Absent => '0',
                Feedback::Present => '1',
                Feedback::Correct => '2',
            };
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        let pattern: FeedbackPattern = "2100012001".parse().unwrap();
        assert_eq!(pattern.len(), 10);
        assert_eq!(pattern.verdicts()[0], Feedback::Correct);
        assert_eq!(pattern.verdicts()[1], Feedback::Present);
        assert_eq!(pattern.verdicts()[2], Feedback::Absent);
        assert_eq!(pattern.to_string(), "2100012001");
    }

    #[test]
    fn parse_letters_and_emoji_agree() {
        let letters: FeedbackPattern = "GYb-X".parse().unwrap();
        let emoji: FeedbackPattern = "🟩🟨⬛⬜⬜".parse().unwrap();
        assert_eq!(letters, emoji);
        assert_eq!(letters.to_emoji(), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert_eq!(
            "21z0".parse::<FeedbackPattern>(),
            Err(FeedbackError::InvalidSymbol {
                symbol: 'z',
                index: 2
            })
        );
        assert_eq!("".parse::<FeedbackPattern>(), Err(FeedbackError::Empty));
    }

    #[test]
    fn hits_are_present_or_correct() {
        assert!(!Feedback::Absent.is_hit());
        assert!(Feedback::Present.is_hit());
        assert!(Feedback::Correct.is_hit());
    }
}
