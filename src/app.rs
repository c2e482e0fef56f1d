//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates answer records
//! - runs the match pipeline
//! - prints reports
//! - writes optional exports

use std::io::Write;

use clap::Parser;

use crate::cli::{Command, MatchArgs, SampleArgs, TuiArgs};
use crate::error::AppError;
use crate::report::format;

pub mod pipeline;

/// Entry point for the `pmatch` binary.
pub fn run() -> Result<(), AppError> {
    // We want a bare `pmatch` (and `pmatch -a answers.json`) to behave like
    // `pmatch tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the zero-argument UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Match(args) => handle_match(args, OutputMode::Full),
        Command::Rank(args) => handle_match(args, OutputMode::RankOnly),
        Command::Checklist(args) => handle_match(args, OutputMode::ChecklistOnly),
        Command::Summary(args) => handle_match(args, OutputMode::SummaryOnly),
        Command::Sample(args) => handle_sample(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
    ChecklistOnly,
    SummaryOnly,
}

fn handle_match(args: MatchArgs, mode: OutputMode) -> Result<(), AppError> {
    let answers = crate::io::answers::load_answers(args.answers.as_deref())?;
    let run = pipeline::run_match(answers);

    match mode {
        OutputMode::Full => {
            println!("{}", format::format_run_summary(&run.answers));
            println!("{}", format::format_score_table(&run.ranked));
            println!("{}", format::format_top_suggestions(&run.ranked));
            println!("{}", format::format_checklist(&run.checklist));
            println!("{}", run.summary);
            println!();
            println!("{}", format::format_quick_plan());
        }
        OutputMode::RankOnly => {
            println!("{}", format::format_score_table(&run.ranked));
        }
        OutputMode::ChecklistOnly => {
            println!("{}", format::format_checklist(&run.checklist));
        }
        OutputMode::SummaryOnly => {
            println!("{}", run.summary);
        }
    }

    if let Some(path) = &args.export_summary {
        crate::io::export::write_summary_txt(path, &run.summary)?;
    }
    if let Some(path) = &args.export_results {
        crate::io::export::write_results_json(path, &run)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let answers = crate::data::generate_answers(args.seed)?;
    let json = serde_json::to_string_pretty(&answers)
        .map_err(|e| AppError::new(4, format!("Failed to serialize sample answers: {e}")))?;

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| {
                AppError::new(
                    2,
                    format!("Failed to create sample file '{}': {e}", path.display()),
                )
            })?;
            file.write_all(json.as_bytes())
                .map_err(|e| AppError::new(2, format!("Failed to write sample file: {e}")))?;
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

/// Rewrite argv so `pmatch` defaults to `pmatch tui`.
///
/// Rules:
/// - `pmatch`                     -> `pmatch tui`
/// - `pmatch -a answers.json`     -> `pmatch tui -a answers.json`
/// - `pmatch --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "match" | "rank" | "checklist" | "summary" | "sample" | "tui"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_tui() {
        assert_eq!(rewrite_args(args(&["pmatch"])), args(&["pmatch", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_the_tui() {
        assert_eq!(
            rewrite_args(args(&["pmatch", "-a", "answers.json"])),
            args(&["pmatch", "tui", "-a", "answers.json"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["pmatch", "rank"])),
            args(&["pmatch", "rank"])
        );
        assert_eq!(
            rewrite_args(args(&["pmatch", "--help"])),
            args(&["pmatch", "--help"])
        );
    }
}
