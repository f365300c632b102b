//! Spell checker combining exact lookup with nearest-word suggestions.

use serde::{Deserialize, Serialize};

use crate::hash_table::HashTable;
use crate::spelling::suggest::{Suggestion, find_match, find_related};

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned for a misspelled word.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig { max_suggestions: 5 }
    }
}

/// Result of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "suggestions", rename_all = "lowercase")]
pub enum CheckOutcome {
    /// The word is in the dictionary.
    Correct,
    /// The word is not in the dictionary; the closest words follow.
    Misspelled(Vec<Suggestion>),
}

impl CheckOutcome {
    /// Check if the word was found.
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckOutcome::Correct)
    }

    /// Suggestions for a misspelled word, empty for a correct one.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            CheckOutcome::Correct => &[],
            CheckOutcome::Misspelled(suggestions) => suggestions,
        }
    }
}

/// A dictionary-backed spell checker.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    table: HashTable,
    config: SuggestionConfig,
}

impl SpellChecker {
    /// Create a checker over the given table with default configuration.
    pub fn new(table: HashTable) -> Self {
        SpellChecker {
            table,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a checker with custom configuration.
    pub fn with_config(table: HashTable, config: SuggestionConfig) -> Self {
        SpellChecker { table, config }
    }

    /// The dictionary table.
    pub fn table(&self) -> &HashTable {
        &self.table
    }

    /// The suggestion configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Check `word`, computing suggestions only when it is not in the dictionary.
    pub fn check(&self, word: &str) -> CheckOutcome {
        if find_match(&self.table, word) {
            CheckOutcome::Correct
        } else {
            CheckOutcome::Misspelled(find_related(
                &self.table,
                word,
                self.config.max_suggestions,
            ))
        }
    }
}
