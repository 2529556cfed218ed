//! Candidate ranking
//!
//! Scores single words, pairs, trios and follow-up guesses by the letter
//! codes they would reveal.

mod marginal;
mod trios;
mod words;

pub use marginal::{rank_words_after, rank_words_after_results};
pub use trios::{
    TrioIndices, TrioPruner, TrioScorer, TrioSearchConfig, TrioSearchError, TrioSearchResult,
    rank_word_trios, rank_word_trios_with_progress, trio_count,
};
pub use words::{
    covered_codes, rank_first_two_word_pairs, rank_first_words, score_word, score_word_set,
};
