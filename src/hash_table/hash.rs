//! String hash functions used for bucket selection.

use std::hash::BuildHasher;

use ahash::RandomState;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Base of the polynomial rolling hash.
const POLYNOMIAL_BASE: u64 = 31;

/// Fixed seeds so that [`HashFunction::AHash`] places keys identically on every run.
const AHASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// The hash function a table uses to place keys into buckets.
///
/// Every variant is deterministic: the same key always produces the same
/// hash, so bucket placement only depends on the key and the capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HashFunction {
    /// Sum of the key's byte values.
    Additive,
    /// Sum of each byte multiplied by its 1-based position.
    #[default]
    PositionWeighted,
    /// Polynomial rolling hash with base 31.
    Polynomial,
    /// AHash with fixed seeds.
    #[serde(rename = "ahash")]
    #[value(name = "ahash")]
    AHash,
}

impl HashFunction {
    /// Get the name of this hash function.
    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::Additive => "additive",
            HashFunction::PositionWeighted => "position-weighted",
            HashFunction::Polynomial => "polynomial",
            HashFunction::AHash => "ahash",
        }
    }

    /// Hash a key.
    pub fn hash(&self, key: &str) -> u64 {
        let bytes = key.as_bytes();
        match self {
            HashFunction::Additive => bytes
                .iter()
                .fold(0u64, |acc, &b| acc.wrapping_add(b as u64)),
            HashFunction::PositionWeighted => {
                bytes.iter().enumerate().fold(0u64, |acc, (i, &b)| {
                    acc.wrapping_add((i as u64 + 1).wrapping_mul(b as u64))
                })
            }
            HashFunction::Polynomial => bytes.iter().fold(0u64, |acc, &b| {
                acc.wrapping_mul(POLYNOMIAL_BASE).wrapping_add(b as u64)
            }),
            HashFunction::AHash => {
                let [k0, k1, k2, k3] = AHASH_SEEDS;
                RandomState::with_seeds(k0, k1, k2, k3).hash_one(key)
            }
        }
    }

    /// Map a key to a bucket index in `0..capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[inline]
    pub fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        (self.hash(key) % capacity as u64) as usize
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
