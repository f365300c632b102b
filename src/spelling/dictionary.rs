//! Loading dictionary words into a hash table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::info;
use regex::bytes::Regex;

use crate::error::{Result, SpellmapError};
use crate::hash_table::HashTable;

/// Value stored for every dictionary word. The table is used as a set.
pub const UNUSED_VALUE: i32 = -1;

/// Characters that make up a dictionary token: ASCII letters, digits and apostrophes.
const WORD_PATTERN: &str = r"[A-Za-z0-9']+";

/// Splits raw bytes into dictionary tokens.
///
/// Bytes outside the token class, including non-ASCII and invalid UTF-8,
/// act as separators.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Create a tokenizer for the dictionary word pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN)
            .map_err(|e| SpellmapError::other(format!("Invalid word pattern: {e}")))?;
        Ok(WordTokenizer { pattern })
    }

    /// Iterate over the tokens of `text` in order of appearance.
    pub fn words<'a>(&'a self, text: &'a [u8]) -> impl Iterator<Item = &'a str> + 'a {
        // Matches are ASCII only, so they are always valid UTF-8.
        self.pattern
            .find_iter(text)
            .filter_map(|m| std::str::from_utf8(m.as_bytes()).ok())
    }
}

/// Summary of a dictionary load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReport {
    /// Tokens read from the source, duplicates included.
    pub tokens: usize,
    /// Distinct words in the table after loading.
    pub words: usize,
    /// Wall-clock time spent loading, in seconds.
    pub seconds: f64,
}

/// Read every token from `reader` into `table` with [`UNUSED_VALUE`].
pub fn load_dictionary<R: BufRead>(reader: R, table: &mut HashTable) -> Result<LoadReport> {
    let tokenizer = WordTokenizer::new()?;
    let start = Instant::now();
    let mut tokens = 0;

    for line in reader.split(b'\n') {
        let line = line?;
        for word in tokenizer.words(&line) {
            table.put(word, UNUSED_VALUE);
            tokens += 1;
        }
    }

    let report = LoadReport {
        tokens,
        words: table.size(),
        seconds: start.elapsed().as_secs_f64(),
    };
    info!(
        "Dictionary loaded in {:.6} seconds ({} tokens, {} words)",
        report.seconds, report.tokens, report.words
    );
    Ok(report)
}

/// Load a dictionary file into `table`.
pub fn load_dictionary_file<P: AsRef<Path>>(
    path: P,
    table: &mut HashTable,
) -> Result<LoadReport> {
    let file = File::open(path)?;
    load_dictionary(BufReader::new(file), table)
}
