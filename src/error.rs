//! Error types for the spellmap library.
//!
//! All fallible operations return [`SpellmapError`] through the crate-wide
//! [`Result`] alias. A missing key is never an error: lookups and removals
//! report absence with `None`.
//!
//! # Examples
//!
//! ```
//! use spellmap::error::{Result, SpellmapError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellmapError::invalid_argument("capacity must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellmap operations.
#[derive(Error, Debug)]
pub enum SpellmapError {
    /// I/O errors (dictionary files, terminal streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A constructor or command received a value it cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellmapError.
pub type Result<T> = std::result::Result<T, SpellmapError>;

impl SpellmapError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellmapError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellmapError::Other(msg.into())
    }
}
