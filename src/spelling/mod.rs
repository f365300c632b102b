//! Spelling checks and "Did you mean?" suggestions over a word table.
//!
//! This module loads dictionary words into a [`HashTable`](crate::hash_table::HashTable),
//! measures edit distance, and picks the closest dictionary words for
//! anything that is not spelled correctly.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
