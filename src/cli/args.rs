//! Command line argument parsing for the spellmap CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::hash_table::{
    DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, HashFunction, TableConfig,
};
use crate::spelling::SuggestionConfig;

/// spellmap - check spelling against a hash table dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "spellmap")]
#[command(about = "Spell checking with edit-distance suggestions over a chained hash table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellmapArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Dictionary file, one or more words per line
    #[arg(
        short,
        long,
        value_name = "DICTIONARY",
        default_value = "dictionary.txt",
        env = "SPELLMAP_DICTIONARY",
        global = true
    )]
    pub dictionary: PathBuf,

    /// Initial number of hash table buckets
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY, global = true)]
    pub capacity: usize,

    /// Load factor above which the table doubles its capacity
    #[arg(long, default_value_t = DEFAULT_MAX_LOAD_FACTOR, global = true)]
    pub load_factor: f64,

    /// Hash function used to place words into buckets
    #[arg(long = "hash", default_value = "position-weighted", global = true)]
    pub hash_function: HashFunction,

    /// Number of suggestions shown for a misspelled word
    #[arg(short = 'k', long, default_value_t = 5, global = true)]
    pub suggestions: usize,

    /// Subcommand to execute (defaults to an interactive session)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl SpellmapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Hash table configuration described by the arguments.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            initial_capacity: self.capacity,
            max_load_factor: self.load_factor,
            hash_function: self.hash_function,
        }
    }

    /// Suggestion configuration described by the arguments.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_suggestions: self.suggestions,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Prompt for words until "quit" or end of input
    Interactive,

    /// Check the given words and exit
    Check(CheckArgs),

    /// Show dictionary and hash table statistics
    Stats,

    /// Print every bucket of the hash table
    Dump,
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Output formats available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
