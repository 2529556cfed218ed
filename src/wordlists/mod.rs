//! Word lists for ranking
//!
//! Provides an embedded ten-letter dictionary compiled into the binary, and
//! loaders for custom lists.

pub mod loader;

// DICTIONARY and DICTIONARY_COUNT, generated by the build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
