//! staffdex - people directory lookup
//!
//! Loads a directory once, builds the lookup engine once, then answers name
//! queries with the JSON payload an assistant tool would return.
//!
//! Usage:
//!     staffdex lookup "alice smith" "chen"
//!     staffdex --directory people.json --top-k 5 lookup --raw "alise smith"
//!     staffdex names --limit 5
//!     staffdex repl < queries.txt
//!
//! Environment variables:
//! - `STAFFDEX_DIRECTORY`: directory source path (default: data/directory.json)
//! - `STAFFDEX_TOP_K`: suggestions per lookup (default: 3)
//! - `RUST_LOG`: log filter, overrides `--log-level`

mod logging;
mod tool;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use staffdex_core::{Directory, FuzzyEngine};
use tracing::{info, warn};

use tool::{directory_context, ToolResponse};

#[derive(Parser, Debug)]
#[command(name = "staffdex")]
#[command(about = "Fuzzy name lookup over a people directory")]
#[command(version)]
struct Args {
    /// Directory source (JSON array of person records)
    #[arg(
        short,
        long,
        env = "STAFFDEX_DIRECTORY",
        default_value = "data/directory.json"
    )]
    directory: PathBuf,

    /// Maximum suggestions per lookup
    #[arg(short = 'k', long, env = "STAFFDEX_TOP_K", default_value = "3")]
    top_k: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one or more names, one JSON line each
    Lookup {
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print the full match result instead of the tool response
        #[arg(long)]
        raw: bool,
    },

    /// Print the assistant context line naming the directory's people
    Names {
        /// Names to list before the total
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Answer queries read from stdin, one per line, until EOF
    Repl {
        /// Print full match results instead of tool responses
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_with_filter(&args.log_level);

    info!("Starting staffdex v{}", env!("CARGO_PKG_VERSION"));

    // Load failures are fatal
    let directory = Directory::load(&args.directory)?;
    let engine = FuzzyEngine::build(directory);
    info!(
        records = engine.record_count(),
        distinct_names = engine.distinct_name_count(),
        "Lookup engine ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Lookup { queries, raw } => {
            for query in &queries {
                answer(&engine, query, args.top_k, raw, &mut out)?;
            }
        }
        Command::Names { limit } => {
            writeln!(out, "{}", directory_context(engine.directory(), limit))?;
        }
        Command::Repl { raw } => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                answer(&engine, &line, args.top_k, raw, &mut out)?;
                out.flush()?;
            }
        }
    }

    Ok(())
}

/// Resolve one query and write it as a single JSON line.
///
/// An empty query is answered with an `invalid_query` payload; it never stops
/// the caller.
fn answer<W: Write>(
    engine: &FuzzyEngine,
    query: &str,
    top_k: usize,
    raw: bool,
    out: &mut W,
) -> io::Result<()> {
    info!(query = %query, "Looking up");

    let lookup = engine.lookup(query, top_k);
    if let Err(err) = &lookup {
        warn!(query = %query, "Rejected query: {}", err);
    }

    let line = match &lookup {
        Ok(result) if raw => serde_json::to_string(result)?,
        _ => serde_json::to_string(&ToolResponse::from_lookup(&lookup))?,
    };
    writeln!(out, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use staffdex_core::PersonRecord;

    fn engine() -> FuzzyEngine {
        FuzzyEngine::build(Directory::from_records(vec![
            PersonRecord::new("Alice Smith", "alice@example.com", "Engineer", "Platform", 1),
            PersonRecord::new("Alice Jones", "ajones@example.com", "Executive", "Sales", 2),
        ]))
    }

    fn answer_json(query: &str, raw: bool) -> Value {
        let mut out = Vec::new();
        answer(&engine(), query, 3, raw, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_answer_tool_response() {
        let value = answer_json("Alice Smith", false);
        assert_eq!(value["status"], "found");
        assert_eq!(value["employee"]["department"], "Platform");
    }

    #[test]
    fn test_answer_raw_result() {
        let value = answer_json("alice", true);
        assert_eq!(value["match_type"], "multiple");
        assert_eq!(value["found"], false);
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_answer_invalid_query_is_not_fatal() {
        let value = answer_json("   ", true);
        assert_eq!(value["status"], "invalid_query");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "staffdex",
            "--directory",
            "people.json",
            "-k",
            "5",
            "lookup",
            "--raw",
            "alice",
            "bob",
        ])
        .unwrap();

        assert_eq!(args.directory, PathBuf::from("people.json"));
        assert_eq!(args.top_k, 5);
        match args.command {
            Command::Lookup { queries, raw } => {
                assert_eq!(queries, vec!["alice", "bob"]);
                assert!(raw);
            }
            other => panic!("expected lookup, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_requires_a_query() {
        assert!(Args::try_parse_from(["staffdex", "lookup"]).is_err());
    }
}
