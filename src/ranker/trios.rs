//! Budgeted search over word trios
//!
//! Scores unordered triples `(i < j < k)` in lexicographic order, keeping
//! only trios that come within `cutoff` of the best score seen so far.
//! The threshold tightens as the scan finds better trios, so a trio kept
//! early may sit below the final best × cutoff.

use crate::core::Word;
use crate::ranking::Ranking;
use crate::scoring::{
    INCLUSION_WEIGHT, LetterValueTable, POSITION_WEIGHT, PositionValueTable, ScoringContext,
};
use crate::stats::PositionRateTable;
use std::fmt;

/// Trio search settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrioSearchConfig {
    /// Fraction of the running best below which a trio is not kept, in `(0, 1]`
    pub cutoff: f64,
    /// Maximum number of trios scored before the scan stops
    pub max_trials: u64,
}

impl Default for TrioSearchConfig {
    fn default() -> Self {
        Self {
            cutoff: 0.99,
            max_trials: 1_000_000_000,
        }
    }
}

impl TrioSearchConfig {
    /// # Errors
    /// Returns `TrioSearchError::InvalidCutoff` unless `0 < cutoff <= 1`.
    pub fn validate(&self) -> Result<(), TrioSearchError> {
        if self.cutoff > 0.0 && self.cutoff <= 1.0 {
            Ok(())
        } else {
            Err(TrioSearchError::InvalidCutoff(self.cutoff))
        }
    }
}

/// Error type for rejected search settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrioSearchError {
    InvalidCutoff(f64),
}

impl fmt::Display for TrioSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCutoff(cutoff) => {
                write!(f, "Cutoff must be in (0, 1], got {cutoff}")
            }
        }
    }
}

impl std::error::Error for TrioSearchError {}

/// Outcome of a trio search
#[derive(Debug, Clone, PartialEq)]
pub struct TrioSearchResult {
    /// Kept trios keyed `"first,second,third"`
    pub ranking: Ranking,
    /// Trios scored before the scan ended
    pub trials: u64,
    /// Highest score among scored trios
    pub best: f64,
}

/// Lexicographic stream of index triples `(i < j < k)` below `n`
#[derive(Debug, Clone)]
pub struct TrioIndices {
    n: usize,
    next: Option<[usize; 3]>,
}

impl TrioIndices {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        let next = if n >= 3 { Some([0, 1, 2]) } else { None };
        Self { n, next }
    }
}

impl Iterator for TrioIndices {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let [i, j, k] = current;
        let n = self.n;

        self.next = if k + 1 < n {
            Some([i, j, k + 1])
        } else if j + 2 < n {
            Some([i, j + 1, j + 2])
        } else if i + 3 < n {
            Some([i + 1, i + 2, i + 3])
        } else {
            None
        };

        Some(current)
    }
}

/// Running state of the evolving-cutoff filter
///
/// Feed scores in scan order with [`TrioPruner::observe`]; the pruner
/// raises `best` first, then keeps the trio only if it is at least
/// `best × cutoff`.
#[derive(Debug, Clone)]
pub struct TrioPruner<T> {
    cutoff: f64,
    best: f64,
    trials: u64,
    kept: Vec<(T, f64)>,
}

impl<T> TrioPruner<T> {
    #[must_use]
    pub const fn new(cutoff: f64) -> Self {
        Self {
            cutoff,
            best: 0.0,
            trials: 0,
            kept: Vec::new(),
        }
    }

    /// Record one scored trio, returning whether it was kept
    pub fn observe(&mut self, trio: T, score: f64) -> bool {
        self.trials += 1;

        if score > self.best {
            self.best = score;
        }
        if score < self.best * self.cutoff {
            return false;
        }

        self.kept.push((trio, score));
        true
    }

    #[must_use]
    pub const fn best(&self) -> f64 {
        self.best
    }

    #[must_use]
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    #[must_use]
    pub fn kept(&self) -> &[(T, f64)] {
        &self.kept
    }

    #[must_use]
    pub fn into_kept(self) -> Vec<(T, f64)> {
        self.kept
    }
}

/// Scores trios on letter codes and position codes together
pub struct TrioScorer<'a> {
    letter_values: &'a LetterValueTable,
    position_values: PositionValueTable,
}

impl<'a> TrioScorer<'a> {
    /// Letter values come from the context corpus, position values from `words`
    #[must_use]
    pub fn new(ctx: &'a ScoringContext, words: &[Word]) -> Self {
        Self {
            letter_values: ctx.letter_values(),
            position_values: PositionValueTable::build(&PositionRateTable::build(words)),
        }
    }

    /// inclusion × 1 + position × 2, each over the union of the three words
    #[must_use]
    pub fn score(&self, first: &Word, second: &Word, third: &Word) -> f64 {
        let codes = first
            .code_set()
            .union(second.code_set())
            .union(third.code_set());
        let positions = first
            .position_set()
            .union(second.position_set())
            .union(third.position_set());

        let inclusion = self.letter_values.score_set(&codes);
        let position = self.position_values.score_set(&positions);

        inclusion * INCLUSION_WEIGHT + position * POSITION_WEIGHT
    }
}

/// Rank word trios from `words`
///
/// # Errors
/// Returns `TrioSearchError::InvalidCutoff` if the cutoff is outside `(0, 1]`.
///
/// # Examples
/// ```
/// use longwordle_ranker::core::Word;
/// use longwordle_ranker::ranker::{TrioSearchConfig, rank_word_trios};
/// use longwordle_ranker::scoring::ScoringContext;
///
/// let words: Vec<Word> = ["abc", "def", "ghi", "abd"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let ctx = ScoringContext::new(words.clone());
///
/// let result = rank_word_trios(&ctx, &words, &TrioSearchConfig::default()).unwrap();
/// assert_eq!(result.trials, 4);
/// assert_eq!(result.ranking.best().unwrap().key, "abc,def,ghi");
/// ```
pub fn rank_word_trios(
    ctx: &ScoringContext,
    words: &[Word],
    config: &TrioSearchConfig,
) -> Result<TrioSearchResult, TrioSearchError> {
    rank_word_trios_with_progress(ctx, words, config, |_| {})
}

/// Rank word trios, reporting the trial count each time the first word advances
///
/// # Errors
/// Returns `TrioSearchError::InvalidCutoff` if the cutoff is outside `(0, 1]`.
pub fn rank_word_trios_with_progress(
    ctx: &ScoringContext,
    words: &[Word],
    config: &TrioSearchConfig,
    mut on_progress: impl FnMut(u64),
) -> Result<TrioSearchResult, TrioSearchError> {
    config.validate()?;

    let scorer = TrioScorer::new(ctx, words);
    let budget = usize::try_from(config.max_trials).unwrap_or(usize::MAX);
    let mut current_first = 0;

    let pruner = TrioIndices::new(words.len()).take(budget).fold(
        TrioPruner::new(config.cutoff),
        |mut pruner, [i, j, k]| {
            if i != current_first {
                current_first = i;
                on_progress(pruner.trials());
            }
            let score = scorer.score(&words[i], &words[j], &words[k]);
            pruner.observe([i, j, k], score);
            pruner
        },
    );
    on_progress(pruner.trials());

    let trials = pruner.trials();
    let best = pruner.best();
    log::info!(
        "scored {trials} of {} trios from {} words; best {best:.3}, kept {}",
        trio_count(words.len()),
        words.len(),
        pruner.kept().len()
    );

    let ranking = Ranking::new(pruner.into_kept().into_iter().map(|([i, j, k], score)| {
        (format!("{},{},{}", words[i], words[j], words[k]), score)
    }));

    Ok(TrioSearchResult {
        ranking,
        trials,
        best,
    })
}

/// Number of unordered triples from `n` items
#[must_use]
pub fn trio_count(n: usize) -> u128 {
    let n = n as u128;
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
