//! Command implementations

pub mod analyze;
pub mod rank;
pub mod trios;

pub use analyze::{AnalysisResult, analyze_word};
pub use rank::{
    RankingReport, first_words, letter_values, word_pairs, words_after, words_after_results,
};
pub use trios::{TrioReport, run_trio_search};
