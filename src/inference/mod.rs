//! Constraint inference from past guesses
//!
//! Turns a guess and its feedback into the letter codes it settled:
//! codes proven present and codes proven absent. Position details are
//! left to positional scoring.

use crate::core::{
    CodeSet, Feedback, FeedbackError, FeedbackPattern, LetterCode, Word, WordError,
};
use crate::stats::OccurrenceTable;
use std::fmt;

/// Error type for malformed guess history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    LengthMismatch {
        word: String,
        word_len: usize,
        feedback_len: usize,
    },
    InvalidWord(WordError),
    InvalidFeedback(FeedbackError),
    MissingFeedback(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                word,
                word_len,
                feedback_len,
            } => write!(
                f,
                "Guess '{word}' has {word_len} letters but {feedback_len} feedback symbols"
            ),
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::MissingFeedback(s) => {
                write!(f, "Expected 'word:feedback', got '{s}'")
            }
        }
    }
}

impl std::error::Error for InferenceError {}

impl From<WordError> for InferenceError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<FeedbackError> for InferenceError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

/// A past guess with its feedback, same length guaranteed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: FeedbackPattern,
}

impl Guess {
    /// # Errors
    /// Returns `InferenceError::LengthMismatch` if the feedback does not
    /// have exactly one verdict per letter.
    pub fn new(word: Word, feedback: FeedbackPattern) -> Result<Self, InferenceError> {
        check_lengths(&word, &feedback)?;
        Ok(Self { word, feedback })
    }

    /// Parse `word:feedback`, e.g. `photogenic:0010001100`
    ///
    /// # Errors
    /// Returns `InferenceError` if the separator is missing, the word or
    /// feedback is invalid, or their lengths differ.
    ///
    /// # Examples
    /// ```
    /// use longwordle_ranker::inference::Guess;
    ///
    /// let guess = Guess::parse("abbot:21000").unwrap();
    /// assert_eq!(guess.word().text(), "abbot");
    /// assert!(Guess::parse("abbot:210").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InferenceError> {
        let (word, feedback) = s
            .split_once(':')
            .ok_or_else(|| InferenceError::MissingFeedback(s.to_string()))?;
        Self::new(Word::new(word.trim())?, feedback.trim().parse()?)
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &FeedbackPattern {
        &self.feedback
    }
}

/// Codes settled by one guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpliedCodes {
    /// Proven present
    pub include: Vec<LetterCode>,
    /// Proven absent
    pub exclude: Vec<LetterCode>,
}

fn check_lengths(word: &Word, feedback: &FeedbackPattern) -> Result<(), InferenceError> {
    if word.len() == feedback.len() {
        Ok(())
    } else {
        Err(InferenceError::LengthMismatch {
            word: word.text().to_string(),
            word_len: word.len(),
            feedback_len: feedback.len(),
        })
    }
}

/// Derive the codes a guess's feedback proves present or absent
///
/// For each distinct letter, every present or correct verdict proves one
/// more copy: `(c, 1)..=(c, hits)` are included. If any copy was marked
/// absent the target has no further copies, so `(c, hits + 1)` onward are
/// excluded, up to the edge of `universe`.
///
/// # Errors
/// Returns `InferenceError::LengthMismatch` if `feedback` does not have
/// one verdict per letter of `guess`.
///
/// # Examples
/// ```
/// use longwordle_ranker::core::{FeedbackPattern, Word};
/// use longwordle_ranker::inference::implied_codes;
/// use longwordle_ranker::stats::OccurrenceTable;
///
/// let corpus: Vec<Word> = ["aa", "ab", "bb"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let universe = OccurrenceTable::build(&corpus);
///
/// let guess = Word::new("bb").unwrap();
/// let feedback: FeedbackPattern = "20".parse().unwrap();
/// let implied = implied_codes(&guess, &feedback, &universe).unwrap();
///
/// let include: Vec<String> = implied.include.iter().map(ToString::to_string).collect();
/// let exclude: Vec<String> = implied.exclude.iter().map(ToString::to_string).collect();
/// assert_eq!(include, ["b1"]);
/// assert_eq!(exclude, ["b2"]);
/// ```
pub fn implied_codes(
    guess: &Word,
    feedback: &FeedbackPattern,
    universe: &OccurrenceTable,
) -> Result<ImpliedCodes, InferenceError> {
    check_lengths(guess, feedback)?;
    Ok(implied_codes_unchecked(guess, feedback, universe))
}

fn implied_codes_unchecked(
    guess: &Word,
    feedback: &FeedbackPattern,
    universe: &OccurrenceTable,
) -> ImpliedCodes {
    // (letter, hits, any absent) in first-appearance order
    let mut tallies: Vec<(u8, u8, bool)> = Vec::new();

    for (letter, verdict) in guess.text().bytes().zip(feedback.verdicts()) {
        let index = match tallies.iter().position(|t| t.0 == letter) {
            Some(index) => index,
            None => {
                tallies.push((letter, 0, false));
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[index];
        match verdict {
            Feedback::Absent => tally.2 = true,
            Feedback::Present | Feedback::Correct => tally.1 += 1,
        }
    }

    let mut implied = ImpliedCodes::default();

    for (letter, hits, any_absent) in tallies {
        implied
            .include
            .extend((1..=hits).map(|n| LetterCode::from_parts(letter, n)));

        if any_absent {
            implied.exclude.extend(
                (hits + 1..)
                    .map_while(|n| LetterCode::new(letter, n))
                    .take_while(|&code| universe.contains(code)),
            );
        }
    }

    implied
}

/// Union of included and excluded codes over a whole guess history
///
/// # Examples
/// ```
/// use longwordle_ranker::core::Word;
/// use longwordle_ranker::inference::{Guess, known_codes};
/// use longwordle_ranker::stats::OccurrenceTable;
///
/// let corpus: Vec<Word> = ["abbot", "cabin"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let universe = OccurrenceTable::build(&corpus);
///
/// let history = [Guess::parse("cabin:00200").unwrap()];
/// let known = known_codes(&history, &universe);
/// assert_eq!(known.len(), 5); // b1 proven present; a1 c1 i1 n1 ruled out
/// ```
#[must_use]
pub fn known_codes(history: &[Guess], universe: &OccurrenceTable) -> CodeSet {
    let mut known = CodeSet::new();

    for guess in history {
        let implied = implied_codes_unchecked(&guess.word, &guess.feedback, universe);
        known.extend(implied.include);
        known.extend(implied.exclude);
    }

    log::debug!(
        "{} guesses settle {} letter codes",
        history.len(),
        known.len()
    );
    known
}
