//! Command-line parsing for the program-match advisor.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/reporting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pmatch", version, about = "Program fit, checklist, and summary for prospective policy students")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score the catalog against an answer record and print the full
    /// advising report (ranking, top suggestions, checklist, summary).
    Match(MatchArgs),
    /// Print the ranked score table only (useful for scripting).
    Rank(MatchArgs),
    /// Print the personalized advising checklist only.
    Checklist(MatchArgs),
    /// Print the shareable summary block only.
    Summary(MatchArgs),
    /// Generate a random, vocabulary-valid answer record as JSON.
    Sample(SampleArgs),
    /// Launch the interactive questionnaire TUI.
    ///
    /// This uses the same underlying match pipeline as `pmatch match`, but
    /// collects answers step by step and re-renders results live.
    Tui(TuiArgs),
}

/// Common options for the report commands.
#[derive(Debug, Parser, Clone)]
pub struct MatchArgs {
    /// Answer record JSON. Missing fields take questionnaire defaults;
    /// omit the flag entirely to score a blank record.
    #[arg(short = 'a', long, value_name = "JSON")]
    pub answers: Option<PathBuf>,

    /// Write the shareable summary text to a file.
    #[arg(long, value_name = "TXT")]
    pub export_summary: Option<PathBuf>,

    /// Export the full match result (scores, ranking, checklist, summary) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_results: Option<PathBuf>,
}

/// Options for the sample generator.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output path (stdout when omitted).
    #[arg(short = 'o', long, value_name = "JSON")]
    pub output: Option<PathBuf>,
}

/// Options for the TUI.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Pre-load answers from a JSON file.
    #[arg(short = 'a', long, value_name = "JSON")]
    pub answers: Option<PathBuf>,
}
