//! Sorted score listings
//!
//! Every ranking operation returns a [`Ranking`]: keys (a word, or words
//! joined by commas) ordered by descending score.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// One ranked key and its score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub key: String,
    pub score: f64,
}

/// Entries sorted by score descending, ties broken by key ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Rank positive scores only; entries scoring 0 or less are dropped
    ///
    /// # Examples
    /// ```
    /// use longwordle_ranker::ranking::Ranking;
    ///
    /// let ranking = Ranking::new([
    ///     ("beta".to_string(), 1.0),
    ///     ("alpha".to_string(), 1.0),
    ///     ("gamma".to_string(), 2.0),
    ///     ("delta".to_string(), 0.0),
    /// ]);
    /// let keys: Vec<&str> = ranking.iter().map(|e| e.key.as_str()).collect();
    /// assert_eq!(keys, ["gamma", "alpha", "beta"]);
    /// ```
    #[must_use]
    pub fn new(scores: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self::build(scores, false)
    }

    /// Rank every score, including zero and negative ones
    #[must_use]
    pub fn with_non_positive(scores: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self::build(scores, true)
    }

    fn build(scores: impl IntoIterator<Item = (String, f64)>, include_non_positive: bool) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();

        let mut entries: Vec<RankedEntry> = scores
            .into_iter()
            .filter(|(_, score)| include_non_positive || *score > 0.0)
            .filter(|(key, _)| seen.insert(key.clone()))
            .map(|(key, score)| RankedEntry { key, score })
            .collect();

        entries.sort_by(compare_entries);

        Self { entries }
    }

    /// The first `n` entries as a new ranking
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of a key, if ranked
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.score)
    }

    /// 1-based rank of a key, if ranked
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key).map(|i| i + 1)
    }

    /// Highest-scoring entry
    #[must_use]
    pub fn best(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key))
}
