//! # spellmap
//!
//! A string-keyed hash table with separate chaining, and a spell checker
//! built on top of it.
//!
//! ## Features
//!
//! - Separate-chaining hash table with load-factor driven doubling
//! - Selectable deterministic string hash functions
//! - Single-row Levenshtein distance
//! - Exact top-k nearest-word suggestions in one pass over the table
//! - Dictionary loading and an interactive command line checker
//!
//! ```
//! use spellmap::hash_table::HashTable;
//! use spellmap::spelling::{SpellChecker, CheckOutcome};
//!
//! let mut table = HashTable::new(16).unwrap();
//! for word in ["cat", "bat", "dog"] {
//!     table.put(word, -1);
//! }
//!
//! let checker = SpellChecker::new(table);
//! assert!(checker.check("cat").is_correct());
//! match checker.check("cst") {
//!     CheckOutcome::Misspelled(suggestions) => assert_eq!(suggestions[0].word, "cat"),
//!     CheckOutcome::Correct => unreachable!(),
//! }
//! ```

pub mod cli;
pub mod error;
pub mod hash_table;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
