//! Separate-chaining hash table used as the word store.
//!
//! The table maps string keys to an `i32` scratch value, grows by doubling
//! its bucket count once the load factor passes the configured maximum, and
//! iterates in a stable order (bucket index, then chain order).

pub mod config;
pub mod hash;
pub mod table;

// Re-export commonly used types
pub use config::*;
pub use hash::*;
pub use table::*;
