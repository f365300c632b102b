//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellmapArgs};
use crate::error::Result;
use crate::hash_table::HashTable;
use crate::spelling::{CheckOutcome, Suggestion};

/// Banner printed above suggestions for a misspelled word.
pub const SUGGESTION_BANNER: &str = "Did you mean ...";

/// Results that can be written in the human-readable format.
pub trait HumanReadable {
    /// Write the human-readable form of this result.
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()>;
}

/// Dictionary and hash table statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub dictionary: String,
    pub hash_function: String,
    pub tokens_read: usize,
    pub size: usize,
    pub capacity: usize,
    pub empty_buckets: usize,
    pub load_factor: f64,
    pub load_seconds: f64,
}

/// Result of checking one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Result of checking a list of words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub results: Vec<WordReport>,
    /// Arguments rejected because they are not a single word of ASCII letters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<String>,
}

/// One key/value pair of a dumped table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpEntry {
    pub key: String,
    pub value: i32,
}

/// Every bucket of a table, in bucket order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDump {
    pub capacity: usize,
    pub size: usize,
    pub buckets: Vec<Vec<DumpEntry>>,
}

impl TableDump {
    /// Snapshot the contents of `table`.
    pub fn from_table(table: &HashTable) -> Self {
        let buckets = (0..table.capacity())
            .map(|index| {
                table
                    .bucket(index)
                    .into_iter()
                    .flatten()
                    .map(|(key, value)| DumpEntry {
                        key: key.to_string(),
                        value,
                    })
                    .collect()
            })
            .collect();
        TableDump {
            capacity: table.capacity(),
            size: table.size(),
            buckets,
        }
    }
}

impl HumanReadable for TableStats {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Dictionary: {}", self.dictionary)?;
        writeln!(out, "Dictionary loaded in {:.6} seconds", self.load_seconds)?;
        writeln!(out, "Tokens read: {}", self.tokens_read)?;
        writeln!(out, "Hash function: {}", self.hash_function)?;
        writeln!(out, "Words: {}", self.size)?;
        writeln!(out, "Buckets: {}", self.capacity)?;
        writeln!(out, "Empty buckets: {}", self.empty_buckets)?;
        writeln!(out, "Table load: {:.6}", self.load_factor)?;
        Ok(())
    }
}

impl HumanReadable for WordReport {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.outcome {
            CheckOutcome::Correct => {
                writeln!(
                    out,
                    "The inputted word, \"{}\" is spelled correctly.",
                    self.word
                )?;
            }
            CheckOutcome::Misspelled(suggestions) => {
                writeln!(
                    out,
                    "The inputted word \"{}\" is spelled incorrectly.",
                    self.word
                )?;
                write_suggestions(out, suggestions)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

impl HumanReadable for CheckReport {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        for report in &self.results {
            report.write_human(out)?;
        }
        for word in &self.invalid {
            writeln!(
                out,
                "Invalid input \"{word}\": enter one word with upper/lowercase letters only"
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for TableDump {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(out, "{index}: ")?;
            for entry in chain {
                write!(out, "[{}, {}] ", entry.key, entry.value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Write the suggestion banner followed by one indented word per line.
pub fn write_suggestions<W: Write>(out: &mut W, suggestions: &[Suggestion]) -> Result<()> {
    writeln!(out, "{SUGGESTION_BANNER}")?;
    for suggestion in suggestions {
        writeln!(out, "    {}", suggestion.word)?;
    }
    Ok(())
}

/// Output a result in the format selected by the arguments.
pub fn output_result<T, W>(result: &T, args: &SpellmapArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanReadable,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &SpellmapArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render<T: Serialize + HumanReadable>(result: &T, argv: &[&str]) -> String {
        let args = SpellmapArgs::parse_from(argv);
        let mut out = Vec::new();
        output_result(result, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_word_report_human() {
        let report = WordReport {
            word: "helo".to_string(),
            outcome: CheckOutcome::Misspelled(vec![
                Suggestion::new("hello", 1),
                Suggestion::new("help", 1),
            ]),
        };
        assert_eq!(
            render(&report, &["spellmap"]),
            "The inputted word \"helo\" is spelled incorrectly.\nDid you mean ...\n    hello\n    help\n\n"
        );

        let report = WordReport {
            word: "hello".to_string(),
            outcome: CheckOutcome::Correct,
        };
        assert_eq!(
            render(&report, &["spellmap"]),
            "The inputted word, \"hello\" is spelled correctly.\n\n"
        );
    }

    #[test]
    fn test_check_report_json() {
        let report = CheckReport {
            results: vec![WordReport {
                word: "cta".to_string(),
                outcome: CheckOutcome::Misspelled(vec![Suggestion::new("cat", 2)]),
            }],
            invalid: Vec::new(),
        };
        assert_eq!(
            render(&report, &["spellmap", "--format", "json"]),
            "{\"results\":[{\"word\":\"cta\",\"status\":\"misspelled\",\"suggestions\":[{\"word\":\"cat\",\"distance\":2}]}]}\n"
        );
    }

    #[test]
    fn test_check_report_lists_invalid_words() {
        let report = CheckReport {
            results: Vec::new(),
            invalid: vec!["don't".to_string()],
        };
        assert_eq!(
            render(&report, &["spellmap"]),
            "Invalid input \"don't\": enter one word with upper/lowercase letters only\n"
        );
        assert_eq!(
            render(&report, &["spellmap", "-f", "json"]),
            "{\"results\":[],\"invalid\":[\"don't\"]}\n"
        );
    }

    #[test]
    fn test_table_dump_matches_display() {
        let mut table = HashTable::new(4).unwrap();
        table.put("cat", -1);
        table.put("dog", 7);
        let dump = TableDump::from_table(&table);

        assert_eq!(dump.capacity, 4);
        assert_eq!(dump.size, 2);
        assert_eq!(render(&dump, &["spellmap"]), table.to_string());

        let json: serde_json::Value =
            serde_json::from_str(&render(&dump, &["spellmap", "--format", "json"])).unwrap();
        assert_eq!(json["buckets"].as_array().unwrap().len(), 4);
        assert_eq!(json["size"], 2);
    }

    #[test]
    fn test_stats_human() {
        let stats = TableStats {
            dictionary: "words.txt".to_string(),
            hash_function: "additive".to_string(),
            tokens_read: 4,
            size: 3,
            capacity: 8,
            empty_buckets: 5,
            load_factor: 0.375,
            load_seconds: 0.0,
        };
        let text = render(&stats, &["spellmap"]);
        assert!(text.contains("Words: 3"));
        assert!(text.contains("Buckets: 8"));
        assert!(text.contains("Empty buckets: 5"));
        assert!(text.contains("Table load: 0.375000"));
    }
}
