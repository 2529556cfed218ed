//! Ranking commands
//!
//! Each command scores a word list against the context's corpus and returns
//! the top of the ranking along with how many entries were scored.

use crate::core::Word;
use crate::inference::Guess;
use crate::ranker::{
    rank_first_two_word_pairs, rank_first_words, rank_words_after, rank_words_after_results,
};
use crate::ranking::Ranking;
use crate::scoring::ScoringContext;
use anyhow::{Context, Result};

/// A truncated ranking ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankingReport {
    pub title: String,
    pub ranking: Ranking,
    /// Entries in the full ranking before truncation
    pub total: usize,
}

impl RankingReport {
    fn new(title: impl Into<String>, ranking: &Ranking, top: usize) -> Self {
        Self {
            title: title.into(),
            ranking: ranking.head(top),
            total: ranking.len(),
        }
    }
}

/// Rank every corpus word as an opening guess
#[must_use]
pub fn first_words(ctx: &ScoringContext, top: usize) -> RankingReport {
    RankingReport::new("FIRST WORDS", &rank_first_words(ctx), top)
}

/// Rank every pair of corpus words as the first two guesses
#[must_use]
pub fn word_pairs(ctx: &ScoringContext, top: usize) -> RankingReport {
    RankingReport::new(
        "FIRST TWO WORDS",
        &rank_first_two_word_pairs(ctx, ctx.corpus()),
        top,
    )
}

/// Rank every letter code by value, zero-valued codes included
#[must_use]
pub fn letter_values(ctx: &ScoringContext, top: usize) -> RankingReport {
    RankingReport::new("LETTER CODE VALUES", &ctx.letter_values().ranking(), top)
}

/// Rank follow-up guesses after `guesses`, ignoring their feedback
///
/// # Errors
///
/// Returns an error if any guess is not a valid word.
pub fn words_after(ctx: &ScoringContext, guesses: &[String], top: usize) -> Result<RankingReport> {
    let guessed = guesses
        .iter()
        .map(|g| Word::new(g.as_str()).with_context(|| format!("Invalid guess '{g}'")))
        .collect::<Result<Vec<_>>>()?;

    let title = format!("AFTER {}", join_upper(guessed.iter().map(Word::text)));
    let ranking = rank_words_after(ctx, &guessed, ctx.corpus());
    Ok(RankingReport::new(title, &ranking, top))
}

/// Rank follow-up guesses after a history of `word:feedback` entries
///
/// # Errors
///
/// Returns an error if any entry fails to parse or its feedback length
/// does not match its word.
pub fn words_after_results(
    ctx: &ScoringContext,
    history: &[String],
    top: usize,
) -> Result<RankingReport> {
    let history = history
        .iter()
        .map(|entry| Guess::parse(entry).with_context(|| format!("Invalid guess '{entry}'")))
        .collect::<Result<Vec<_>>>()?;

    let title = format!(
        "AFTER {}",
        join_upper(
            history
                .iter()
                .map(|g| format!("{} {}", g.word(), g.feedback().to_emoji()))
        )
    );
    let ranking = rank_words_after_results(ctx, &history, ctx.corpus());
    Ok(RankingReport::new(title, &ranking, top))
}

fn join_upper<S: AsRef<str>>(parts: impl Iterator<Item = S>) -> String {
    parts
        .map(|s| s.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}
