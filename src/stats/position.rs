//! Positional letter statistics
//!
//! How often each letter sits at each index, over a candidate list that
//! need not be the whole corpus.

use crate::core::{ALPHABET_SIZE, MAX_WORD_LEN, Word, index_letter, letter_index};

/// Fraction of `words` whose letter at `position` is `letter`
///
/// Words shorter than `position + 1` simply don't match.
#[must_use]
pub fn position_rate(letter: u8, position: usize, words: &[Word]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let hits = words
        .iter()
        .filter(|word| word.char_at(position) == Some(letter))
        .count();

    hits as f64 / words.len() as f64
}

/// Per-position letter probabilities for positions `0..MAX_WORD_LEN`
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRateTable {
    rates: [[f64; ALPHABET_SIZE]; MAX_WORD_LEN],
}

impl PositionRateTable {
    /// Count every (letter, position) pair of `words` in one pass
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut counts = [[0usize; ALPHABET_SIZE]; MAX_WORD_LEN];

        for word in words {
            for code in word.position_set().iter() {
                counts[code.position()][letter_index(code.letter())] += 1;
            }
        }

        let total = words.len();
        let rates = counts.map(|row| {
            row.map(|count| {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                }
            })
        });
        log::debug!("built position rate table over {total} words");

        Self { rates }
    }

    /// Probability of `letter` at `position`; 0 for positions past the table
    #[must_use]
    pub fn rate(&self, letter: u8, position: usize) -> f64 {
        if !letter.is_ascii_lowercase() {
            return 0.0;
        }
        self.rates
            .get(position)
            .map_or(0.0, |row| row[letter_index(letter)])
    }

    /// Iterate `(letter, position, rate)` for every cell
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize, f64)> + '_ {
        self.rates.iter().enumerate().flat_map(|(position, row)| {
            row.iter()
                .enumerate()
                .map(move |(index, &rate)| (index_letter(index), position, rate))
        })
    }
}
