//! `protege-conformance`: Checks the frame translation laws over an ontology.
//!
//! Runs the complete conformance suite across:
//! - Declarations of the ontology signature
//! - Round trip of asserted property values
//! - Read-only derived values
//! - Relevance of axioms to unrelated subjects
//!
//! **Usage:**
//! ```text
//! protege-conformance --ontology <doc.json> [--format text|json] [--lang <tag>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use protege_clients::{logging, ClientConfig};
use protege_conformance::run_path;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

/// Run the frame translation conformance suite.
#[derive(Parser)]
#[command(
    name = "protege-conformance",
    about = "Validate frame translation laws over an OWL ontology document"
)]
struct Args {
    /// Ontology document (JSON).
    #[arg(long)]
    ontology: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Preferred label language (overrides the config file).
    #[arg(long)]
    lang: Option<String>,

    /// Configuration file (default: ./protege.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ClientConfig::load(args.config.as_deref())?.with_overrides(None, args.lang, None);
    logging::init(config.log_filter());

    let report = run_path(&args.ontology, config.label_language.as_deref())?;
    let summary = report.summary();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            println!("Frame Translation Conformance Report");
            println!("====================================");
            println!();
            for result in &report.results {
                println!(
                    "[{}] {}: {}",
                    result.severity.tag(),
                    result.validator,
                    result.message
                );
                for detail in &result.details {
                    println!("       {detail}");
                }
            }
            println!();
            println!("Summary: {summary}");
        }
    }

    if summary.failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", summary.failed);
        process::exit(1);
    }

    if matches!(args.format, Format::Text) {
        println!("Conformance PASSED.");
    }
    Ok(())
}
