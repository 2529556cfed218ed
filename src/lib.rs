//! Long Wordle Ranker
//!
//! Ranks opening guesses for long-word Wordle variants by how much
//! information they reveal: each letter code ("contains at least n copies of
//! this letter") is worth its binary entropy over the corpus, and a set of
//! guesses is worth the union of the codes it covers.
//!
//! # Quick Start
//!
//! ```rust
//! use longwordle_ranker::core::Word;
//! use longwordle_ranker::ranker::rank_first_words;
//! use longwordle_ranker::scoring::ScoringContext;
//!
//! let corpus: Vec<Word> = ["abbot", "cabin", "robot", "tonic"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let ctx = ScoringContext::new(corpus);
//!
//! let ranking = rank_first_words(&ctx);
//! println!("Best opener: {}", ranking.best().unwrap().key);
//! ```

// Core domain types
pub mod core;

// Corpus statistics
pub mod stats;

// Entropy values and the scoring context
pub mod scoring;

// Sorted score listings
pub mod ranking;

// Feedback to known codes
pub mod inference;

// Word, pair and trio ranking
pub mod ranker;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
