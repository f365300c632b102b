//! Command implementations for the spellmap CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellmapError};
use crate::hash_table::HashTable;
use crate::spelling::*;

/// Word that ends an interactive session.
pub const QUIT_WORD: &str = "quit";

const PROMPT: &str = "Enter a word or \"quit\" to quit: ";
const INVALID_PROMPT: &str = "Invalid input\nEnter one word with upper/lowercase letters only: ";

/// Execute a CLI command.
pub fn execute_command(args: SpellmapArgs) -> Result<()> {
    let interactive = matches!(args.command, None | Some(Command::Interactive));
    if interactive && args.output_format != OutputFormat::Human {
        return Err(SpellmapError::invalid_argument(
            "interactive sessions only support human output",
        ));
    }

    let (checker, report) = load_checker(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        None | Some(Command::Interactive) => {
            if args.verbosity() > 0 {
                writeln!(
                    out,
                    "Dictionary loaded in {:.6} seconds",
                    report.seconds
                )?;
            }
            let stdin = io::stdin();
            run_session(&checker, stdin.lock(), &mut out)
        }
        Some(Command::Check(check_args)) => check_words(&checker, check_args, &args, &mut out),
        Some(Command::Stats) => show_stats(&checker, &report, &args, &mut out),
        Some(Command::Dump) => {
            let dump = TableDump::from_table(checker.table());
            output_result(&dump, &args, &mut out)
        }
    }
}

/// Build the table described by the arguments and load the dictionary into it.
pub fn load_checker(args: &SpellmapArgs) -> Result<(SpellChecker, LoadReport)> {
    let mut table = HashTable::with_config(args.table_config())?;
    info!("Loading dictionary from {}", args.dictionary.display());
    let report = load_dictionary_file(&args.dictionary, &mut table)?;
    debug!(
        "Table holds {} words in {} buckets ({} empty)",
        table.size(),
        table.capacity(),
        table.empty_bucket_count()
    );
    Ok((
        SpellChecker::with_config(table, args.suggestion_config()),
        report,
    ))
}

/// Validate one line of user input.
///
/// Accepts a single token of ASCII letters surrounded by optional whitespace
/// and returns it lower-cased. Anything else yields `None`.
pub fn normalize_input(line: &str) -> Option<String> {
    let word = line.trim();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word.to_ascii_lowercase())
    } else {
        None
    }
}

/// Run the prompt/check loop until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are rejected like any other invalid input.
pub fn run_session<R, W>(checker: &SpellChecker, input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.split(b'\n') {
        let line = line?;
        let word = std::str::from_utf8(&line).ok().and_then(normalize_input);
        let Some(word) = word else {
            write!(out, "{INVALID_PROMPT}")?;
            out.flush()?;
            continue;
        };

        writeln!(out)?;
        if word == QUIT_WORD {
            return Ok(());
        }

        let report = WordReport {
            outcome: checker.check(&word),
            word,
        };
        report.write_human(out)?;

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Check each word given on the command line.
///
/// Words are validated like interactive input; rejected ones are listed
/// separately instead of being checked.
fn check_words<W: Write>(
    checker: &SpellChecker,
    check_args: &CheckArgs,
    args: &SpellmapArgs,
    out: &mut W,
) -> Result<()> {
    let mut report = CheckReport {
        results: Vec::new(),
        invalid: Vec::new(),
    };
    for raw in &check_args.words {
        match normalize_input(raw) {
            Some(word) => report.results.push(WordReport {
                outcome: checker.check(&word),
                word,
            }),
            None => report.invalid.push(raw.clone()),
        }
    }

    output_result(&report, args, out)
}

/// Show dictionary and table statistics.
fn show_stats<W: Write>(
    checker: &SpellChecker,
    report: &LoadReport,
    args: &SpellmapArgs,
    out: &mut W,
) -> Result<()> {
    let table = checker.table();
    let stats = TableStats {
        dictionary: args.dictionary.to_string_lossy().to_string(),
        hash_function: table.hash_function().to_string(),
        tokens_read: report.tokens,
        size: table.size(),
        capacity: table.capacity(),
        empty_buckets: table.empty_bucket_count(),
        load_factor: table.load_factor(),
        load_seconds: report.seconds,
    };

    output_result(&stats, args, out)
}
