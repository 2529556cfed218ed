//! Display functions for command results

use super::formatters::{format_count, score_bar};
use crate::commands::{AnalysisResult, RankingReport, TrioReport};
use crate::ranking::Ranking;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_entries(ranking: &Ranking) {
    let Some(best) = ranking.best().map(|e| e.score) else {
        println!("\n   {}", "Nothing scored above zero".yellow());
        return;
    };

    let width = ranking.iter().map(|e| e.key.len()).max().unwrap_or(0);
    println!();
    for (i, entry) in ranking.iter().enumerate() {
        let bar = score_bar(entry.score, best, 20);
        println!(
            "   {:>3}. {:<width$}  [{}] {}",
            i + 1,
            entry.key.to_uppercase(),
            bar.green(),
            format!("{:.4}", entry.score).bright_yellow()
        );
    }
}

/// Print the top of a ranking
pub fn print_ranking(report: &RankingReport) {
    print_header(&report.title);
    print_entries(&report.ranking);
    println!(
        "\n   Showing {} of {} ranked",
        report.ranking.len(),
        report.total
    );
}

/// Print the result of a trio search
pub fn print_trio_result(report: &TrioReport) {
    print_header("WORD TRIOS");
    print_entries(&report.ranking);

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Words:        {}", report.words);
    println!(
        "   Trials:       {} of {}",
        format_count(u128::from(report.trials)),
        format_count(report.total_trios)
    );
    println!(
        "   Best score:   {}",
        format!("{:.4}", report.best).bright_yellow().bold()
    );
    println!("   Cutoff:       {}", report.cutoff);
    println!("   Kept:         {}", report.kept);
    println!("   Time taken:   {:.2}s", report.duration.as_secs_f64());
    if u128::from(report.trials) < report.total_trios {
        println!(
            "   {}",
            "Trial budget reached before the scan finished".yellow()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 {}", "Letter codes:".bright_cyan().bold());
    for (code, value) in &result.letter_codes {
        println!("   {:<6} {value:.4}", code.to_string());
    }

    println!("\n📍 {}", "Position codes:".bright_cyan().bold());
    for (code, value) in &result.position_codes {
        println!("   {:<6} {value:.4}", code.to_string());
    }

    println!(
        "\n📊 {} {} words:",
        "Against".bright_cyan().bold(),
        result.corpus_size
    );
    println!("   Inclusion:   {:.4}", result.inclusion_score);
    println!("   Position:    {:.4}", result.position_score);
    println!(
        "   Weighted:    {}",
        format!("{:.4}", result.weighted_total).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   First-word rank: {}", format!("#{rank}").green()),
        None => println!("   First-word rank: {}", "unranked".yellow()),
    }
}
