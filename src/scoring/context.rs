//! Scoring context: one corpus snapshot and its lazily built tables

use super::letter_values::LetterValueTable;
use crate::core::Word;
use crate::stats::OccurrenceTable;
use std::sync::OnceLock;

/// Owns a corpus and the statistics derived from it
///
/// Tables are built on first use and reused for the life of the context.
/// The corpus is never mutated, so a new corpus means a new context.
#[derive(Debug)]
pub struct ScoringContext {
    corpus: Vec<Word>,
    occurrence: OnceLock<OccurrenceTable>,
    letter_values: OnceLock<LetterValueTable>,
}

impl ScoringContext {
    /// # Examples
    /// ```
    /// use longwordle_ranker::core::Word;
    /// use longwordle_ranker::scoring::ScoringContext;
    ///
    /// let corpus = vec![Word::new("abbot").unwrap(), Word::new("cabin").unwrap()];
    /// let ctx = ScoringContext::new(corpus);
    /// assert_eq!(ctx.occurrence_table().counts(b'b'), [2, 1]);
    /// ```
    #[must_use]
    pub const fn new(corpus: Vec<Word>) -> Self {
        Self {
            corpus,
            occurrence: OnceLock::new(),
            letter_values: OnceLock::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn corpus(&self) -> &[Word] {
        &self.corpus
    }

    /// Occurrence counts over the corpus, built on first call
    pub fn occurrence_table(&self) -> &OccurrenceTable {
        self.occurrence
            .get_or_init(|| OccurrenceTable::build(&self.corpus))
    }

    /// Letter code values over the corpus, built on first call
    pub fn letter_values(&self) -> &LetterValueTable {
        self.letter_values.get_or_init(|| {
            let table = LetterValueTable::build(self.occurrence_table());
            log::debug!("built letter value table ({} codes)", table.iter().count());
            table
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCode;

    fn context(words: &[&str]) -> ScoringContext {
        ScoringContext::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn tables_are_built_once() {
        let ctx = context(&["abbot", "cabin"]);
        let first: *const LetterValueTable = ctx.letter_values();
        let second: *const LetterValueTable = ctx.letter_values();
        assert_eq!(first, second);
    }

    #[test]
    fn separate_contexts_do_not_share_tables() {
        let left = context(&["ab", "cd"]);
        let right = context(&["ab", "ab"]);
        let a1 = LetterCode::new(b'a', 1).unwrap();

        assert!((left.letter_values().value(a1) - 0.5).abs() < 1e-12);
        assert!(right.letter_values().value(a1).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_is_usable() {
        let ctx = context(&[]);
        assert!(ctx.corpus().is_empty());
        assert_eq!(ctx.occurrence_table().codes().count(), 0);
        assert_eq!(ctx.letter_values().iter().count(), 0);
    }
}
