//! Corpus occurrence statistics
//!
//! Pure aggregations over a word list: multiset-inclusion counts per
//! letter, and letter probabilities per position.

mod occurrence;
mod position;

pub use occurrence::{OccurrenceTable, all_possible_codes, occurrence_counts};
pub use position::{PositionRateTable, position_rate};
