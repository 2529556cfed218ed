//! Build script to generate the embedded dictionary
//!
//! Reads `data/dictionary.txt`, checks every entry is a lowercase word the
//! ranker can score, and writes a sorted, deduplicated const array.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/dictionary.txt";
const MAX_WORD_LEN: usize = 10;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));

    let words = collect_words(&content);
    let source = render(&words);

    let output_path = Path::new(&out_dir).join("dictionary.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={INPUT}");
}

/// Trimmed, non-empty entries; a malformed entry fails the build
fn collect_words(content: &str) -> BTreeSet<&str> {
    let mut words = BTreeSet::new();

    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.len() <= MAX_WORD_LEN && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{INPUT}:{}: '{word}' is not a lowercase word of at most {MAX_WORD_LEN} letters",
            line_no + 1
        );
        if !words.insert(word) {
            println!("cargo:warning=duplicate dictionary entry '{word}'");
        }
    }

    words
}

fn render(words: &BTreeSet<&str>) -> String {
    let count = words.len();
    let mut out = String::new();

    let _ = writeln!(out, "// Generated from {INPUT}");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// Default ten-letter dictionary ({count} words, sorted)");
    let _ = writeln!(out, "pub const DICTIONARY: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// Number of words in DICTIONARY");
    let _ = writeln!(out, "pub const DICTIONARY_COUNT: usize = {count};");

    out
}
