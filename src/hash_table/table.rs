//! Separate-chaining hash table keyed by strings.
//!
//! Each bucket owns a chain of entries stored in insertion order. New keys
//! are appended to the tail of their chain, and the same tail-append path is
//! used when a resize rehomes entries, so iteration order is always bucket
//! index ascending followed by chain order.

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::hash_table::config::TableConfig;
use crate::hash_table::hash::HashFunction;

/// A key and its scratch value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: i32,
}

type Chain = Vec<Entry>;

/// A string-keyed hash table with separate chaining and automatic growth.
///
/// Invariants maintained by every public method:
/// - `capacity() > 0`
/// - `size()` equals the total number of entries across all chains
/// - every entry lives in bucket `hash(key) % capacity()`
/// - a key appears at most once in the whole table
#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Chain>,
    size: usize,
    hash_function: HashFunction,
    max_load_factor: f64,
}

impl HashTable {
    /// Create an empty table with `capacity` buckets and default settings otherwise.
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::with_capacity(capacity))
    }

    /// Create an empty table from a configuration.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;

        Ok(HashTable {
            buckets: empty_buckets(config.initial_capacity),
            size: 0,
            hash_function: config.hash_function,
            max_load_factor: config.max_load_factor,
        })
    }

    /// Insert `key` with `value`, or overwrite the value if `key` is already present.
    ///
    /// Inserting a new key may grow the table to twice its capacity when the
    /// load factor exceeds the configured maximum.
    pub fn put(&mut self, key: &str, value: i32) {
        if let Some(existing) = self.get_mut(key) {
            *existing = value;
            return;
        }

        let index = self.bucket_index(key);
        self.buckets[index].push(Entry {
            key: key.to_owned(),
            value,
        });
        self.size += 1;

        if self.load_factor() > self.max_load_factor {
            self.resize(self.capacity() * 2);
        }
    }

    /// Get the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&i32> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Get a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Check whether `key` is stored in the table.
    pub fn contains(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)]
            .iter()
            .any(|entry| entry.key == key)
    }

    /// Remove `key` and return its value. Does nothing if `key` is absent.
    ///
    /// The remaining entries of the chain keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|entry| entry.key == key)?;
        let entry = chain.remove(position);
        self.size -= 1;
        Some(entry.value)
    }

    /// Remove every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.size = 0;
    }

    /// Rehash every entry into `new_capacity` buckets.
    ///
    /// Entries are visited in bucket order, then chain order, and moved to
    /// the tail of their new chain. The old bucket array is taken out of the
    /// table before rehashing starts and dropped once it has been drained.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is zero.
    pub fn resize(&mut self, new_capacity: usize) {
        assert!(new_capacity > 0, "hash table capacity must be greater than zero");

        let old_capacity = self.capacity();
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for entry in old_buckets.into_iter().flatten() {
            let index = self.hash_function.bucket_index(&entry.key, new_capacity);
            self.buckets[index].push(entry);
        }

        debug!(
            "Resized hash table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.size
        );
    }

    /// Number of entries in the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets whose chain is empty.
    pub fn empty_bucket_count(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Load factor above which `put` doubles the capacity.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Hash function used to place keys.
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Bucket that `key` belongs to at the current capacity.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.hash_function.bucket_index(key, self.capacity())
    }

    /// Entries of a single bucket in chain order, or `None` if `index` is out of range.
    pub fn bucket(&self, index: usize) -> Option<impl Iterator<Item = (&str, i32)> + '_> {
        self.buckets
            .get(index)
            .map(|chain| chain.iter().map(|entry| (entry.key.as_str(), entry.value)))
    }

    /// All entries, in bucket order and then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_str(), entry.value))
    }

    /// All keys, in the same order as [`iter`](Self::iter).
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl fmt::Display for HashTable {
    /// Writes one line per bucket: `index: [key, value] [key, value] `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "{index}: ")?;
            for entry in chain {
                write!(f, "[{}, {}] ", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn empty_buckets(capacity: usize) -> Vec<Chain> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_placement(table: &HashTable) {
        let mut counted = 0;
        for index in 0..table.capacity() {
            for (key, _) in table.bucket(index).unwrap() {
                assert_eq!(
                    table.bucket_index(key),
                    index,
                    "{key} is stored in the wrong bucket"
                );
                counted += 1;
            }
        }
        assert_eq!(counted, table.size());
    }

    #[test]
    fn test_new_table() {
        let table = HashTable::new(10).unwrap();
        assert_eq!(table.size(), 0);
        assert_eq!(table.capacity(), 10);
        assert_eq!(table.empty_bucket_count(), 10);
        assert_eq!(table.load_factor(), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(HashTable::new(0).is_err());
    }

    #[test]
    fn test_put_get_contains() {
        let mut table = HashTable::new(10).unwrap();
        table.put("cat", 1);
        table.put("dog", 2);
        table.put("bird", 3);

        assert_eq!(table.size(), 3);
        assert_eq!(table.get("cat"), Some(&1));
        assert_eq!(table.get("dog"), Some(&2));
        assert_eq!(table.get("bird"), Some(&3));
        assert!(table.contains("cat"));
        assert!(!table.contains("fish"));
        assert_eq!(table.get("fish"), None);
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut table = HashTable::new(10).unwrap();
        table.put("cat", 1);
        table.put("cat", 7);
        assert_eq!(table.size(), 1);
        assert_eq!(table.get("cat"), Some(&7));

        table.put("cat", 7);
        assert_eq!(table.size(), 1);
        assert_eq!(table.get("cat"), Some(&7));
    }

    #[test]
    fn test_get_mut() {
        let mut table = HashTable::new(4).unwrap();
        table.put("cat", 1);
        *table.get_mut("cat").unwrap() += 10;
        assert_eq!(table.get("cat"), Some(&11));
        assert!(table.get_mut("dog").is_none());
    }

    #[test]
    fn test_chain_is_tail_appended() {
        // A single bucket forces every key into one chain.
        let mut table = HashTable::with_config(TableConfig {
            initial_capacity: 1,
            max_load_factor: 100.0,
            ..Default::default()
        })
        .unwrap();
        table.put("first", 1);
        table.put("second", 2);
        table.put("third", 3);

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_keeps_chain_order() {
        let mut table = HashTable::with_config(TableConfig {
            initial_capacity: 1,
            max_load_factor: 100.0,
            ..Default::default()
        })
        .unwrap();
        for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
            table.put(key, i as i32);
        }

        assert_eq!(table.remove("b"), Some(1));
        assert_eq!(table.size(), 3);
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);

        // Head and tail removal.
        assert_eq!(table.remove("a"), Some(0));
        assert_eq!(table.remove("d"), Some(3));
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["c"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut table = HashTable::new(4).unwrap();
        table.put("cat", 1);
        assert_eq!(table.remove("dog"), None);
        assert_eq!(table.size(), 1);
        assert!(table.contains("cat"));
    }

    #[test]
    fn test_grows_past_load_factor() {
        let mut table = HashTable::new(4).unwrap();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);
        // 3 / 4 == 0.75 does not exceed the threshold
        assert_eq!(table.capacity(), 4);

        table.put("d", 4);
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.size(), 4);
        for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            assert_eq!(table.get(key), Some(&value));
        }
        assert_placement(&table);
    }

    #[test]
    fn test_overwrite_never_triggers_growth() {
        let mut table = HashTable::new(4).unwrap();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);
        for value in 0..10 {
            table.put("c", value);
        }
        assert_eq!(table.capacity(), 4);
    }

    #[test]
    fn test_explicit_resize() {
        let mut table = HashTable::new(50).unwrap();
        let words = ["apple", "banana", "cherry", "date", "elder", "fig", "grape"];
        for (i, word) in words.iter().enumerate() {
            table.put(word, i as i32);
        }

        table.resize(3);
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.size(), words.len());
        assert_placement(&table);

        table.resize(101);
        assert_eq!(table.capacity(), 101);
        assert_eq!(table.size(), words.len());
        assert_placement(&table);
        for (i, word) in words.iter().enumerate() {
            assert_eq!(table.get(word), Some(&(i as i32)));
        }
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than zero")]
    fn test_resize_to_zero_panics() {
        let mut table = HashTable::new(4).unwrap();
        table.resize(0);
    }

    #[test]
    fn test_resize_preserves_relative_chain_order() {
        let mut table = HashTable::with_config(TableConfig {
            initial_capacity: 2,
            max_load_factor: 100.0,
            ..Default::default()
        })
        .unwrap();
        for word in ["one", "two", "three", "four", "five"] {
            table.put(word, -1);
        }
        let before: Vec<String> = table.keys().map(str::to_owned).collect();

        // With one bucket, the chain is the old bucket order flattened.
        table.resize(1);
        let after: Vec<String> = table.keys().map(str::to_owned).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_bucket_count() {
        let mut table = HashTable::with_config(TableConfig {
            initial_capacity: 5,
            max_load_factor: 100.0,
            hash_function: HashFunction::Additive,
        })
        .unwrap();
        // "ab" and "ba" share a bucket under the additive hash
        table.put("ab", 1);
        table.put("ba", 2);
        assert_eq!(table.empty_bucket_count(), 4);
        assert_eq!(table.load_factor(), 0.4);
    }

    #[test]
    fn test_clear() {
        let mut table = HashTable::new(4).unwrap();
        for word in ["a", "b", "c", "d", "e"] {
            table.put(word, 0);
        }
        let capacity = table.capacity();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), capacity);
        assert_eq!(table.empty_bucket_count(), capacity);
        assert!(!table.contains("a"));
    }

    #[test]
    fn test_display() {
        let mut table = HashTable::with_config(TableConfig {
            initial_capacity: 3,
            max_load_factor: 100.0,
            hash_function: HashFunction::Additive,
        })
        .unwrap();
        // 'a' = 97 -> bucket 1, 'b' = 98 -> bucket 2, 'c' = 99 -> bucket 0
        table.put("a", -1);
        table.put("b", 5);
        table.put("c", 0);

        assert_eq!(table.to_string(), "0: [c, 0] \n1: [a, -1] \n2: [b, 5] \n");
    }

    #[test]
    fn test_bucket_out_of_range() {
        let table = HashTable::new(4).unwrap();
        assert!(table.bucket(4).is_none());
        assert_eq!(table.bucket(3).unwrap().count(), 0);
    }
}
