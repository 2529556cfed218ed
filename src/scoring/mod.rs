//! Entropy scoring model
//!
//! Turns corpus frequencies into information values per letter code and
//! per (letter, position) pair.

mod context;
mod entropy;
mod letter_values;

pub use context::ScoringContext;
pub use entropy::{INCLUSION_WEIGHT, POSITION_WEIGHT, entropy};
pub use letter_values::{LetterValueTable, PositionValueTable};
