//! Trio search command
//!
//! Runs the budgeted trio search over the corpus (or its first `limit`
//! words) with a terminal progress bar.

use crate::core::Word;
use crate::ranker::{TrioSearchConfig, rank_word_trios_with_progress, trio_count};
use crate::ranking::Ranking;
use crate::scoring::ScoringContext;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a trio search run
#[derive(Debug, Clone)]
pub struct TrioReport {
    pub ranking: Ranking,
    /// Trios kept before truncation
    pub kept: usize,
    pub trials: u64,
    pub total_trios: u128,
    pub words: usize,
    pub best: f64,
    pub cutoff: f64,
    pub duration: Duration,
}

/// Search word trios and keep the top `top` of the ranking
///
/// # Errors
///
/// Returns an error if the cutoff is outside `(0, 1]`.
pub fn run_trio_search(
    ctx: &ScoringContext,
    config: &TrioSearchConfig,
    limit: Option<usize>,
    top: usize,
    show_progress: bool,
) -> Result<TrioReport> {
    let corpus = ctx.corpus();
    let words: &[Word] = &corpus[..limit.unwrap_or(corpus.len()).min(corpus.len())];

    let total_trios = trio_count(words.len());
    let budget = total_trios.min(u128::from(config.max_trials));
    let budget = u64::try_from(budget).unwrap_or(u64::MAX);

    let pb = if show_progress {
        ProgressBar::new(budget)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} words", words.len()));

    let start = Instant::now();
    let result = rank_word_trios_with_progress(ctx, words, config, |trials| {
        pb.set_position(trials);
    })?;
    pb.finish_with_message(format!("best {:.3}", result.best));

    Ok(TrioReport {
        kept: result.ranking.len(),
        ranking: result.ranking.head(top),
        trials: result.trials,
        total_trios,
        words: words.len(),
        best: result.best,
        cutoff: config.cutoff,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> ScoringContext {
        ScoringContext::new(list.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    const CORPUS: &[&str] = &["abc", "def", "ghi", "adg", "beh"];

    #[test]
    fn searches_every_trio_within_budget() {
        let ctx = context(CORPUS);
        let report =
            run_trio_search(&ctx, &TrioSearchConfig::default(), None, 10, false).unwrap();

        assert_eq!(report.words, 5);
        assert_eq!(report.total_trios, 10);
        assert_eq!(report.trials, 10);
        assert_eq!(
            report.ranking.best().map(|e| e.key.as_str()),
            Some("abc,def,ghi")
        );
    }

    #[test]
    fn limit_restricts_words() {
        let ctx = context(CORPUS);
        let report =
            run_trio_search(&ctx, &TrioSearchConfig::default(), Some(3), 10, false).unwrap();

        assert_eq!(report.words, 3);
        assert_eq!(report.trials, 1);
        assert_eq!(report.kept, 1);
    }

    #[test]
    fn limit_past_corpus_is_clamped() {
        let ctx = context(CORPUS);
        let report =
            run_trio_search(&ctx, &TrioSearchConfig::default(), Some(99), 10, false).unwrap();
        assert_eq!(report.words, CORPUS.len());
    }

    #[test]
    fn max_trials_stops_early() {
        let ctx = context(CORPUS);
        let config = TrioSearchConfig {
            max_trials: 4,
            ..TrioSearchConfig::default()
        };
        let report = run_trio_search(&ctx, &config, None, 10, false).unwrap();
        assert_eq!(report.trials, 4);
        assert_eq!(report.total_trios, 10);
    }

    #[test]
    fn invalid_cutoff_is_an_error() {
        let ctx = context(CORPUS);
        let config = TrioSearchConfig {
            cutoff: 1.5,
            ..TrioSearchConfig::default()
        };
        assert!(run_trio_search(&ctx, &config, None, 10, false).is_err());
    }
}
