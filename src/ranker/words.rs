//! Opening-guess scoring for single words and word pairs
//!
//! A guess set is worth the summed value of the letter codes it covers.
//! Codes shared between words count once: a fact is only learned the
//! first time it is revealed.

use crate::core::{CodeSet, Word};
use crate::ranking::Ranking;
use crate::scoring::ScoringContext;
use rayon::prelude::*;

/// Summed letter-code value of one word
///
/// # Examples
/// ```
/// use longwordle_ranker::core::Word;
/// use longwordle_ranker::ranker::score_word;
/// use longwordle_ranker::scoring::ScoringContext;
///
/// let corpus: Vec<Word> = ["aa", "ab", "bb", "cd", "ce", "de"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let ctx = ScoringContext::new(corpus);
///
/// let ab = Word::new("ab").unwrap();
/// let aa = Word::new("aa").unwrap();
/// assert!(score_word(&ctx, &ab) > score_word(&ctx, &aa));
/// ```
#[must_use]
pub fn score_word(ctx: &ScoringContext, word: &Word) -> f64 {
    ctx.letter_values().score_word(word)
}

/// Summed letter-code value over the union of the words' codes
#[must_use]
pub fn score_word_set(ctx: &ScoringContext, words: &[&Word]) -> f64 {
    ctx.letter_values().score_set(&covered_codes(words))
}

/// Union of every code the words reveal
#[must_use]
pub fn covered_codes(words: &[&Word]) -> CodeSet {
    words.iter().fold(CodeSet::new(), |mut covered, word| {
        covered.union_with(word.code_set());
        covered
    })
}

/// Rank every corpus word on its own
#[must_use]
pub fn rank_first_words(ctx: &ScoringContext) -> Ranking {
    let values = ctx.letter_values();

    let scores: Vec<(String, f64)> = ctx
        .corpus()
        .par_iter()
        .map(|word| (word.text().to_string(), values.score_word(word)))
        .collect();

    Ranking::new(scores)
}

/// Rank every unordered pair `(i < j)` of `words`, keyed `"first,second"`
#[must_use]
pub fn rank_first_two_word_pairs(ctx: &ScoringContext, words: &[Word]) -> Ranking {
    let values = ctx.letter_values();

    let scores: Vec<(String, f64)> = (0..words.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            let first = &words[i];
            words[i + 1..].iter().map(move |second| {
                let covered = first.code_set().union(second.code_set());
                (format!("{first},{second}"), values.score_set(&covered))
            })
        })
        .collect();

    log::debug!("scored {} word pairs", scores.len());
    Ranking::new(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn context(list: &[&str]) -> ScoringContext {
        ScoringContext::new(words(list))
    }

    fn keys(ranking: &Ranking) -> Vec<&str> {
        ranking.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn word_paired_with_itself_scores_as_word() {
        let ctx = context(&["abbot", "cabin", "robot", "bobby"]);
        for word in ctx.corpus() {
            let alone = score_word(&ctx, word);
            let doubled = score_word_set(&ctx, &[word, word]);
            assert!((alone - doubled).abs() < 1e-12, "{word}");
        }
    }

    #[test]
    fn set_score_never_exceeds_sum_of_parts() {
        let ctx = context(&["abbot", "cabin", "robot", "bobby"]);
        let corpus = ctx.corpus();
        for a in corpus {
            for b in corpus {
                let pair = score_word_set(&ctx, &[a, b]);
                let sum = score_word(&ctx, a) + score_word(&ctx, b);
                assert!(pair <= sum + 1e-12);
                assert!(pair + 1e-12 >= score_word(&ctx, a).max(score_word(&ctx, b)));
            }
        }
    }

    #[test]
    fn distinct_letters_beat_repeats() {
        // a2 and b2 are rarer than a fresh letter is informative
        let ctx = context(&["aa", "ab", "bb", "cd", "ce", "de"]);
        let ranking = rank_first_words(&ctx);

        assert!(ranking.get("ab").unwrap() > ranking.get("aa").unwrap());
        assert!(ranking.get("ab").unwrap() > ranking.get("bb").unwrap());
    }

    #[test]
    fn first_words_drop_worthless_words() {
        // Every word has an 'a', so "a"'s only code a1 is worthless
        let ctx = context(&["a", "ab", "ac"]);
        let ranking = rank_first_words(&ctx);
        assert_eq!(keys(&ranking), ["ab", "ac"]);
    }

    #[test]
    fn pairs_cover_every_unordered_pair() {
        let list = words(&["abc", "def", "ghi", "adg"]);
        let ctx = ScoringContext::new(list.clone());
        let ranking = rank_first_two_word_pairs(&ctx, &list);

        assert_eq!(ranking.len(), 6);
        assert!(ranking.get("abc,def").is_some());
        assert!(ranking.get("def,abc").is_none());
    }

    #[test]
    fn disjoint_pair_beats_overlapping_pair() {
        let list = words(&["abc", "abd", "efg"]);
        let ctx = ScoringContext::new(list.clone());
        let ranking = rank_first_two_word_pairs(&ctx, &list);

        assert!(ranking.get("abc,efg").unwrap() > ranking.get("abc,abd").unwrap());
    }

    #[test]
    fn rankings_are_repeatable() {
        let list = words(&["measurably", "photogenic", "dressmaker", "journalist"]);
        let ctx = ScoringContext::new(list.clone());

        assert_eq!(rank_first_words(&ctx), rank_first_words(&ctx));
        assert_eq!(
            rank_first_two_word_pairs(&ctx, &list),
            rank_first_two_word_pairs(&ctx, &list)
        );
    }
}
