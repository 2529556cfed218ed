//! Multiset-inclusion statistics
//!
//! For each letter, how many corpus words contain it at least once, at
//! least twice, and so on.

use crate::core::{ALPHABET_SIZE, LetterCode, Word, index_letter, letter_index};

/// Count corpus words containing at least `i + 1` copies of `letter`
///
/// Entry `i` of the result is that count. The sequence stops at the
/// largest number of copies any single word has, so a letter that never
/// occurs yields an empty vector. Counts are non-increasing.
///
/// # Examples
/// ```
/// use longwordle_ranker::core::Word;
/// use longwordle_ranker::stats::occurrence_counts;
///
/// let corpus: Vec<Word> = ["abbot", "bobby", "cat"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// assert_eq!(occurrence_counts(b'b', &corpus), [2, 2, 1]);
/// assert!(occurrence_counts(b'z', &corpus).is_empty());
/// ```
#[must_use]
pub fn occurrence_counts(letter: u8, corpus: &[Word]) -> Vec<usize> {
    let mut counts: Vec<usize> = Vec::new();

    for word in corpus {
        let copies = usize::from(word.count_of(letter));
        if counts.len() < copies {
            counts.resize(copies, 0);
        }
        for slot in &mut counts[..copies] {
            *slot += 1;
        }
    }

    counts
}

/// Occurrence counts for all 26 letters over one corpus
///
/// Also defines the code universe: `(c, n)` exists iff some corpus word
/// has at least `n` copies of `c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    counts: [Vec<usize>; ALPHABET_SIZE],
    corpus_size: usize,
}

impl OccurrenceTable {
    #[must_use]
    pub fn build(corpus: &[Word]) -> Self {
        let counts = std::array::from_fn(|index| occurrence_counts(index_letter(index), corpus));
        log::debug!("built occurrence table over {} words", corpus.len());

        Self {
            counts,
            corpus_size: corpus.len(),
        }
    }

    /// Counts for one letter; empty for letters outside `a..=z`
    #[must_use]
    pub fn counts(&self, letter: u8) -> &[usize] {
        if letter.is_ascii_lowercase() {
            &self.counts[letter_index(letter)]
        } else {
            &[]
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Words with at least this many copies of the letter, 0 outside the universe
    #[must_use]
    pub fn count(&self, code: LetterCode) -> usize {
        self.counts(code.letter())
            .get(usize::from(code.ordinal()) - 1)
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of the corpus having this code
    #[must_use]
    pub fn rate(&self, code: LetterCode) -> f64 {
        if self.corpus_size == 0 {
            return 0.0;
        }
        self.count(code) as f64 / self.corpus_size as f64
    }

    /// Whether the code belongs to the corpus-derived universe
    #[must_use]
    pub fn contains(&self, code: LetterCode) -> bool {
        usize::from(code.ordinal()) <= self.counts(code.letter()).len()
    }

    /// Every code in the universe, in letter then ordinal order
    pub fn codes(&self) -> impl Iterator<Item = LetterCode> + '_ {
        self.counts.iter().enumerate().flat_map(|(index, counts)| {
            (1..=counts.len() as u8).filter_map(move |n| LetterCode::new(index_letter(index), n))
        })
    }
}

/// The universe of letter codes as a list, e.g. a1 a2 b1 ...
#[must_use]
pub fn all_possible_codes(table: &OccurrenceTable) -> Vec<LetterCode> {
    table.codes().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn counts_are_non_increasing() {
        let words = corpus(&["mizzenmast", "defensemen", "measurably", "exhaustion"]);
        for letter in b'a'..=b'z' {
            let counts = occurrence_counts(letter, &words);
            assert!(
                counts.windows(2).all(|pair| pair[0] >= pair[1]),
                "letter {} counts {counts:?}",
                letter as char
            );
        }
    }

    #[test]
    fn counts_stop_at_max_copies() {
        let words = corpus(&["defensemen", "photogenic"]);
        // defensemen has 4 e's, photogenic has 1
        assert_eq!(occurrence_counts(b'e', &words), [2, 1, 1, 1]);
        assert_eq!(occurrence_counts(b'n', &words), [2, 1]);
    }

    #[test]
    fn missing_letter_is_empty() {
        let words = corpus(&["abc", "abd"]);
        assert!(occurrence_counts(b'q', &words).is_empty());
        assert!(occurrence_counts(b'a', &[]).is_empty());
    }

    #[test]
    fn table_matches_per_letter_counts() {
        let words = corpus(&["aa", "ab", "bb"]);
        let table = OccurrenceTable::build(&words);

        assert_eq!(table.corpus_size(), 3);
        assert_eq!(table.counts(b'a'), [2, 1]);
        assert_eq!(table.counts(b'b'), [2, 1]);
        assert!(table.counts(b'c').is_empty());
    }

    #[test]
    fn rate_normalizes_by_corpus_size() {
        let words = corpus(&["aa", "ab", "bb", "cd"]);
        let table = OccurrenceTable::build(&words);

        let a1 = LetterCode::new(b'a', 1).unwrap();
        let a3 = LetterCode::new(b'a', 3).unwrap();
        assert!((table.rate(a1) - 0.5).abs() < f64::EPSILON);
        assert!(table.rate(a3).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_has_no_rates() {
        let table = OccurrenceTable::build(&[]);
        assert!(table.rate(LetterCode::new(b'a', 1).unwrap()).abs() < f64::EPSILON);
        assert_eq!(table.codes().count(), 0);
    }

    #[test]
    fn universe_lists_every_code() {
        let words = corpus(&["abbot", "cat"]);
        let table = OccurrenceTable::build(&words);

        let codes: Vec<String> = all_possible_codes(&table)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(codes, ["a1", "b1", "b2", "c1", "o1", "t1"]);

        assert!(table.contains(LetterCode::new(b'b', 2).unwrap()));
        assert!(!table.contains(LetterCode::new(b'b', 3).unwrap()));
        assert!(!table.contains(LetterCode::new(b'z', 1).unwrap()));
    }
}
