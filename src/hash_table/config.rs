//! Configuration for hash table construction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellmapError};
use crate::hash_table::hash::HashFunction;

/// Default number of buckets for a dictionary table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;

/// Load factor above which a table doubles its capacity.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Configuration for a [`HashTable`](crate::hash_table::HashTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of buckets the table starts with.
    pub initial_capacity: usize,
    /// Maximum ratio of entries to buckets before the table grows.
    pub max_load_factor: f64,
    /// Hash function used for bucket selection.
    pub hash_function: HashFunction,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_function: HashFunction::default(),
        }
    }
}

impl TableConfig {
    /// Create a configuration with the given capacity and default settings otherwise.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        TableConfig {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Check that the configuration describes a usable table.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(SpellmapError::invalid_argument(
                "capacity must be greater than zero",
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(SpellmapError::invalid_argument(format!(
                "max load factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}
