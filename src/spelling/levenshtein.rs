//! Levenshtein distance calculation for spelling suggestions.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions required to change one word into the other. Strings are
/// compared byte by byte, which is exact for the ASCII words the dictionary
/// holds.
///
/// A single row of `a.len() + 1` cells is kept; the outer loop walks `b` and
/// the inner loop walks `a`. Swapping the arguments yields the same result.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let mut row: Vec<usize> = (0..=a.len()).collect();
    fill_row(&mut row, a.as_bytes(), b.as_bytes());
    row[a.len()]
}

/// Run the single-row recurrence for `b` against `a`, leaving the final row in `row`.
///
/// `row` must hold `a.len() + 1` cells initialised to `0..=a.len()`.
fn fill_row(row: &mut [usize], a: &[u8], b: &[u8]) {
    for (x, &b_char) in b.iter().enumerate() {
        // Value of the diagonal cell, i.e. row[y - 1] from the previous pass
        let mut diagonal = row[0];
        row[0] = x + 1;

        for (y, &a_char) in a.iter().enumerate() {
            let above = row[y + 1];
            let cost = if a_char == b_char { 0 } else { 1 };

            row[y + 1] = min(
                min(
                    above + 1,  // deletion
                    row[y] + 1, // insertion
                ),
                diagonal + cost, // substitution
            );
            diagonal = above;
        }
    }
}

/// Computes distances from one query to many candidates.
///
/// The query's cost row is allocated once and reset for each candidate,
/// which matters when scanning a whole dictionary.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    row: Vec<usize>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let row = Vec::with_capacity(query.len() + 1);
        LevenshteinMatcher { query, row }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&mut self, candidate: &str) -> usize {
        self.row.clear();
        self.row.extend(0..=self.query.len());
        fill_row(&mut self.row, self.query.as_bytes(), candidate.as_bytes());
        self.row[self.query.len()]
    }
}
