//! Long Wordle Ranker - CLI
//!
//! Ranks first guesses, guess pairs and guess trios by letter-code entropy.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use longwordle_ranker::{
    commands::{
        analyze_word, first_words, letter_values, run_trio_search, word_pairs, words_after,
        words_after_results,
    },
    core::Word,
    output::{print_analysis_result, print_ranking, print_trio_result},
    ranker::TrioSearchConfig,
    scoring::ScoringContext,
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "longwordle_ranker",
    about = "Rank long-word Wordle guesses by letter-code entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default, built-in ten-letter dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of ranked entries to show
    #[arg(short = 'n', long, global = true, default_value = "20")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank single words as a first guess
    First,

    /// Rank pairs of words as the first two guesses
    Pairs,

    /// Search word trios with a cutoff and trial budget
    Trios {
        /// Keep trios scoring at least this fraction of the best so far
        #[arg(short, long, default_value = "0.99")]
        cutoff: f64,

        /// Stop after scoring this many trios
        #[arg(short = 'm', long, default_value = "1000000000")]
        max_trials: u64,

        /// Only search the first N words of the list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rank follow-up guesses after some words, ignoring feedback
    After {
        /// Words already guessed
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Rank follow-up guesses from guesses with feedback, e.g. abbot:01200
    AfterResults {
        /// Guesses as word:feedback (0/b absent, 1/y present, 2/g correct)
        #[arg(required = true)]
        history: Vec<String>,
    },

    /// Show the value of every letter code
    Letters,

    /// Break down the score of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Load the corpus based on the -w flag
fn load_corpus(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path).with_context(|| format!("Failed to read '{path}'"))?,
    };
    log::info!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ctx = ScoringContext::new(load_corpus(&cli.wordlist)?);
    let top = cli.top;

    match cli.command {
        Commands::First => print_ranking(&first_words(&ctx, top)),
        Commands::Pairs => print_ranking(&word_pairs(&ctx, top)),
        Commands::Letters => print_ranking(&letter_values(&ctx, top)),
        Commands::After { guesses } => print_ranking(&words_after(&ctx, &guesses, top)?),
        Commands::AfterResults { history } => {
            print_ranking(&words_after_results(&ctx, &history, top)?);
        }
        Commands::Analyze { word } => print_analysis_result(&analyze_word(&ctx, &word)?),
        Commands::Trios {
            cutoff,
            max_trials,
            limit,
            quiet,
        } => {
            let config = TrioSearchConfig { cutoff, max_trials };
            let report = run_trio_search(&ctx, &config, limit, top, !quiet)?;
            print_trio_result(&report);
        }
    }

    Ok(())
}
