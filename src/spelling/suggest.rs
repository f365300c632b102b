//! Nearest-neighbour suggestion search over a hash table's keys.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::hash_table::HashTable;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// A dictionary word close to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            distance,
        }
    }
}

/// A word under consideration during one scan.
///
/// Ordered by distance, then by the position at which the scan met the word,
/// so the heap's maximum is always the candidate to evict first.
#[derive(Debug)]
struct Candidate<'a> {
    distance: usize,
    ordinal: usize,
    word: &'a str,
}

impl Candidate<'_> {
    fn rank(&self) -> (usize, usize) {
        (self.distance, self.ordinal)
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Check whether `word` is stored in the table.
pub fn find_match(table: &HashTable, word: &str) -> bool {
    table.contains(word)
}

/// Find the `k` keys closest to `word` by edit distance.
///
/// Scans every entry once, keeping at most `k` candidates in a max-heap.
/// The result holds `min(k, table.size())` suggestions sorted by ascending
/// distance; equal distances keep the order in which the table iterates
/// (bucket index, then chain order). Distances are computed fresh for every
/// call and nothing is written back to the table.
pub fn find_related(table: &HashTable, word: &str, k: usize) -> Vec<Suggestion> {
    if k == 0 {
        return Vec::new();
    }

    let mut matcher = LevenshteinMatcher::new(word);
    let mut heap: BinaryHeap<Candidate<'_>> = BinaryHeap::with_capacity(k + 1);

    for (ordinal, key) in table.keys().enumerate() {
        let candidate = Candidate {
            distance: matcher.distance(key),
            ordinal,
            word: key,
        };

        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(mut worst) = heap.peek_mut() {
            // A later word never displaces an earlier one at the same distance
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|candidate| Suggestion::new(candidate.word, candidate.distance))
        .collect()
}
