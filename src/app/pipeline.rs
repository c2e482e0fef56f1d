//! Shared "match pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! answers -> scores -> ranking -> {checklist, summary}
//!
//! The pipeline is pure and infallible: every stage is a total function of
//! its input, so front-ends can re-run it after every answer mutation.

use crate::domain::{AnswerRecord, ScoreMap, ScoredProgram};
use crate::report;
use crate::score;

/// How many top-ranked programs feed the checklist and summary.
const TOP_N: usize = 2;

/// All computed outputs for one answer snapshot.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub answers: AnswerRecord,
    pub scores: ScoreMap,
    pub ranked: Vec<ScoredProgram>,
    pub checklist: Vec<String>,
    pub summary: String,
}

/// Execute the full pipeline for one answer snapshot.
pub fn run_match(answers: AnswerRecord) -> RunOutput {
    let scores = score::score(&answers);
    let ranked = report::rank(&scores);
    let top = report::top_ids(&ranked, TOP_N);
    let checklist = report::build_checklist(&answers, &top);
    let summary = report::format_summary(&answers, &ranked);

    RunOutput {
        answers,
        scores,
        ranked,
        checklist,
        summary,
    }
}
