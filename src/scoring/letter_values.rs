//! Information value of each letter code and position code

use super::entropy::entropy;
use crate::core::{
    ALPHABET_SIZE, CodeSet, LetterCode, MAX_WORD_LEN, PositionSet, Word, index_letter,
    letter_index, set_bits,
};
use crate::ranking::Ranking;
use crate::stats::{OccurrenceTable, PositionRateTable};

/// Entropy score per letter code, derived from corpus occurrence rates
///
/// Codes outside the corpus universe have no entry and score 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterValueTable {
    values: [Vec<f64>; ALPHABET_SIZE],
}

impl LetterValueTable {
    #[must_use]
    pub fn build(occurrence: &OccurrenceTable) -> Self {
        let size = occurrence.corpus_size();
        let values = std::array::from_fn(|index| {
            occurrence
                .counts(index_letter(index))
                .iter()
                .map(|&count| {
                    if size == 0 {
                        0.0
                    } else {
                        entropy(count as f64 / size as f64)
                    }
                })
                .collect()
        });

        Self { values }
    }

    /// Value of one code, 0 when the code is outside the universe
    #[must_use]
    pub fn value(&self, code: LetterCode) -> f64 {
        self.values[letter_index(code.letter())]
            .get(usize::from(code.ordinal()) - 1)
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of values over a set of codes
    #[must_use]
    pub fn score_set(&self, codes: &CodeSet) -> f64 {
        self.values
            .iter()
            .enumerate()
            .map(|(index, values)| {
                set_bits(codes.mask(index))
                    .map_while(|bit| values.get(usize::from(bit)))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Sum of values over a word's codes
    #[must_use]
    pub fn score_word(&self, word: &Word) -> f64 {
        self.score_set(word.code_set())
    }

    /// Every code in the universe with its value
    pub fn iter(&self) -> impl Iterator<Item = (LetterCode, f64)> + '_ {
        self.values.iter().enumerate().flat_map(|(index, values)| {
            values.iter().enumerate().map(move |(i, &value)| {
                (LetterCode::from_parts(index_letter(index), i as u8 + 1), value)
            })
        })
    }

    /// Diagnostic view of the whole table, zero-valued codes included
    #[must_use]
    pub fn ranking(&self) -> Ranking {
        Ranking::with_non_positive(self.iter().map(|(code, value)| (code.to_string(), value)))
    }
}

/// Entropy score per (letter, position), derived from a position rate table
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValueTable {
    values: [[f64; ALPHABET_SIZE]; MAX_WORD_LEN],
}

impl PositionValueTable {
    #[must_use]
    pub fn build(rates: &PositionRateTable) -> Self {
        let mut values = [[0.0; ALPHABET_SIZE]; MAX_WORD_LEN];
        for (letter, position, rate) in rates.iter() {
            values[position][letter_index(letter)] = entropy(rate);
        }
        Self { values }
    }

    /// Value of a letter at a position; 0 past the table
    #[must_use]
    pub fn value(&self, letter: u8, position: usize) -> f64 {
        if !letter.is_ascii_lowercase() {
            return 0.0;
        }
        self.values
            .get(position)
            .map_or(0.0, |row| row[letter_index(letter)])
    }

    /// Sum of values over a set of position codes
    #[must_use]
    pub fn score_set(&self, positions: &PositionSet) -> f64 {
        (0..ALPHABET_SIZE)
            .map(|index| {
                set_bits(positions.mask(index))
                    .map(|position| self.values[usize::from(position)][index])
                    .sum::<f64>()
            })
            .sum()
    }
}
