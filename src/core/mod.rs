//! Core domain types for the ranker
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words, the letter/position codes derived from them, and guess feedback.

mod code;
mod feedback;
mod word;

pub use code::{ALPHABET_SIZE, CodeSet, LetterCode, MAX_ORDINAL, PositionCode, PositionSet};
pub(crate) use code::{index_letter, letter_index, set_bits};
pub use feedback::{Feedback, FeedbackError, FeedbackPattern};
pub use word::{MAX_WORD_LEN, Word, WordError};
