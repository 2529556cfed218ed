//! Word analysis command
//!
//! Breaks a word's score down into the letter codes and position codes it covers.

use crate::core::{LetterCode, PositionCode, Word};
use crate::ranker::rank_first_words;
use crate::scoring::{INCLUSION_WEIGHT, POSITION_WEIGHT, PositionValueTable, ScoringContext};
use crate::stats::PositionRateTable;
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub letter_codes: Vec<(LetterCode, f64)>,
    pub position_codes: Vec<(PositionCode, f64)>,
    pub inclusion_score: f64,
    pub position_score: f64,
    pub weighted_total: f64,
    /// 1-based place among first words; `None` if the word scores nothing or is not in the corpus
    pub rank: Option<usize>,
    pub corpus_size: usize,
}

/// Analyze the information value of a word against the context's corpus
///
/// # Errors
///
/// Returns an error if the word is invalid (empty, too long, or not letters).
pub fn analyze_word(ctx: &ScoringContext, word: &str) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;

    let values = ctx.letter_values();
    let position_values = PositionValueTable::build(&PositionRateTable::build(ctx.corpus()));

    let letter_codes: Vec<(LetterCode, f64)> = word
        .codes()
        .iter()
        .map(|&code| (code, values.value(code)))
        .collect();

    let position_codes: Vec<(PositionCode, f64)> = word
        .position_set()
        .iter()
        .map(|code| {
            let value = position_values.value(code.letter(), code.position());
            (code, value)
        })
        .collect();

    let inclusion_score = values.score_word(&word);
    let position_score = position_values.score_set(word.position_set());
    let weighted_total = inclusion_score * INCLUSION_WEIGHT + position_score * POSITION_WEIGHT;

    let rank = rank_first_words(ctx).position(word.text());

    Ok(AnalysisResult {
        word: word.text().to_string(),
        letter_codes,
        position_codes,
        inclusion_score,
        position_score,
        weighted_total,
        rank,
        corpus_size: ctx.corpus().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> ScoringContext {
        ScoringContext::new(list.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn analyze_valid_word() {
        let ctx = context(&["abbot", "cabin", "robot", "tonic"]);
        let result = analyze_word(&ctx, "abbot").unwrap();

        assert_eq!(result.word, "abbot");
        assert_eq!(result.corpus_size, 4);
        // a1 b1 b2 o1 t1
        assert_eq!(result.letter_codes.len(), 5);
        assert_eq!(result.position_codes.len(), 5);
        assert!(result.inclusion_score > 0.0);
        assert!(result.rank.is_some());
    }

    #[test]
    fn scores_add_up() {
        let ctx = context(&["abbot", "cabin", "robot", "tonic"]);
        let result = analyze_word(&ctx, "cabin").unwrap();

        let inclusion: f64 = result.letter_codes.iter().map(|(_, v)| v).sum();
        let position: f64 = result.position_codes.iter().map(|(_, v)| v).sum();
        assert!((inclusion - result.inclusion_score).abs() < 1e-9);
        assert!((position - result.position_score).abs() < 1e-9);
        assert!(
            (result.weighted_total - (inclusion + 2.0 * position)).abs() < 1e-9,
            "position information counts double"
        );
    }

    #[test]
    fn word_outside_corpus_has_no_rank() {
        let ctx = context(&["abbot", "cabin", "robot", "tonic"]);
        let result = analyze_word(&ctx, "zesty").unwrap();

        assert!(result.rank.is_none());
        // Only t1 is in the universe
        assert!(result.inclusion_score > 0.0);
    }

    #[test]
    fn analyze_invalid_word() {
        let ctx = context(&["abbot"]);
        assert!(analyze_word(&ctx, "ab3").is_err());
        assert!(analyze_word(&ctx, "").is_err());
    }

    #[test]
    fn input_is_case_insensitive() {
        let ctx = context(&["abbot", "cabin", "robot", "tonic"]);
        let upper = analyze_word(&ctx, "ROBOT").unwrap();
        let lower = analyze_word(&ctx, "robot").unwrap();
        assert_eq!(upper.word, "robot");
        assert_eq!(upper.rank, lower.rank);
    }
}
