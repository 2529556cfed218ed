//! Follow-up guess ranking
//!
//! Once some codes are known, a candidate is only worth the codes it
//! would reveal that are still unknown.

use crate::core::{CodeSet, Word};
use crate::inference::{Guess, known_codes};
use crate::ranking::Ranking;
use crate::scoring::{LetterValueTable, ScoringContext};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::words::covered_codes;

/// Rank candidates by the codes not already covered by `guessed`
///
/// Ignores feedback: every code of every past guess counts as spent.
/// Candidates equal to a past guess are left out.
///
/// # Examples
/// ```
/// use longwordle_ranker::core::Word;
/// use longwordle_ranker::ranker::rank_words_after;
/// use longwordle_ranker::scoring::ScoringContext;
///
/// let corpus: Vec<Word> = ["abbot", "cabin", "robot", "tonic"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let ctx = ScoringContext::new(corpus.clone());
///
/// let ranking = rank_words_after(&ctx, &[Word::new("abbot").unwrap()], &corpus);
/// assert!(ranking.get("abbot").is_none());
/// assert!(ranking.get("cabin").is_some());
/// ```
#[must_use]
pub fn rank_words_after(ctx: &ScoringContext, guessed: &[Word], candidates: &[Word]) -> Ranking {
    let guessed_refs: Vec<&Word> = guessed.iter().collect();
    let covered = covered_codes(&guessed_refs);

    rank_unknown(ctx.letter_values(), &covered, guessed, candidates)
}

/// Rank candidates by the codes the guess history has not settled
///
/// Uses feedback to decide which codes are proven present or absent,
/// which can be fewer or more than the codes the guesses contain.
#[must_use]
pub fn rank_words_after_results(
    ctx: &ScoringContext,
    history: &[Guess],
    candidates: &[Word],
) -> Ranking {
    let known = known_codes(history, ctx.occurrence_table());
    let guessed: Vec<Word> = history.iter().map(|g| g.word().clone()).collect();

    rank_unknown(ctx.letter_values(), &known, &guessed, candidates)
}

fn rank_unknown(
    values: &LetterValueTable,
    known: &CodeSet,
    guessed: &[Word],
    candidates: &[Word],
) -> Ranking {
    let guessed: FxHashSet<&str> = guessed.iter().map(Word::text).collect();

    let scores: Vec<(String, f64)> = candidates
        .par_iter()
        .filter(|word| !guessed.contains(word.text()))
        .map(|word| {
            let unknown = word.code_set().difference(known);
            (word.text().to_string(), values.score_set(&unknown))
        })
        .collect();

    Ranking::new(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranker::rank_first_words;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const CORPUS: &[&str] = &[
        "abbot", "cabin", "robot", "tonic", "bobby", "candy", "zesty", "quirk",
    ];

    #[test]
    fn guessed_codes_are_spent() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());
        let guessed = words(&["abbot"]);
        let spent = covered_codes(&[&guessed[0]]);

        let ranking = rank_words_after(&ctx, &guessed, &corpus);

        for entry in &ranking {
            let word = Word::new(entry.key.as_str()).unwrap();
            let fresh = word.code_set().difference(&spent);
            let expected = ctx.letter_values().score_set(&fresh);
            assert!((entry.score - expected).abs() < 1e-12, "{}", entry.key);
        }
    }

    #[test]
    fn fully_covered_words_drop_out() {
        let corpus = words(&["abbot", "bat", "tab", "cog"]);
        let ctx = ScoringContext::new(corpus.clone());

        let ranking = rank_words_after(&ctx, &words(&["abbot"]), &corpus);

        // bat and tab reveal nothing abbot did not
        assert!(ranking.get("bat").is_none());
        assert!(ranking.get("tab").is_none());
        assert!(ranking.get("cog").is_some());
    }

    #[test]
    fn no_guesses_matches_first_words() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());

        assert_eq!(rank_words_after(&ctx, &[], &corpus), rank_first_words(&ctx));
        assert_eq!(
            rank_words_after_results(&ctx, &[], &corpus),
            rank_first_words(&ctx)
        );
    }

    #[test]
    fn feedback_can_leave_codes_unknown() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());

        // Both b's hit, so b3 stays open just as in blind ranking
        let history = [Guess::parse("abbot:01200").unwrap()];
        let blind = rank_words_after(&ctx, &words(&["abbot"]), &corpus);
        let informed = rank_words_after_results(&ctx, &history, &corpus);

        assert!(informed.get("bobby").is_some());
        assert_eq!(informed.get("bobby"), blind.get("bobby"));
    }

    #[test]
    fn feedback_can_settle_more_than_the_guess() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());

        // One b hit, one missed: b2 and b3 are proven absent
        let history = [Guess::parse("abbot:01000").unwrap()];
        let blind = rank_words_after(&ctx, &words(&["abbot"]), &corpus);
        let informed = rank_words_after_results(&ctx, &history, &corpus);

        assert!(informed.get("bobby").unwrap() < blind.get("bobby").unwrap());
    }

    #[test]
    fn history_words_are_excluded() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());
        let history = [Guess::parse("zesty:00000").unwrap()];

        let ranking = rank_words_after_results(&ctx, &history, &corpus);
        assert!(ranking.get("zesty").is_none());
    }

    #[test]
    fn guesses_outside_candidates_are_harmless() {
        let corpus = words(CORPUS);
        let ctx = ScoringContext::new(corpus.clone());

        let ranking = rank_words_after(&ctx, &words(&["xylyl"]), &corpus);
        assert_eq!(ranking.len(), corpus.len());
    }
}
