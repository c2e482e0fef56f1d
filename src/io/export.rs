//! Export the match result.
//!
//! Two outputs: the shareable summary as plain text (exactly the bytes the
//! summary formatter produced) and a JSON bundle with everything a
//! downstream tool might want (scores, ranking, checklist, summary).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::app::pipeline::RunOutput;
use crate::domain::{AnswerRecord, ScoreMap};
use crate::error::AppError;

/// One ranking row in the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub score: u8,
}

/// The full JSON export payload.
#[derive(Debug, Clone, Serialize)]
pub struct MatchExport<'a> {
    pub tool: &'static str,
    pub generated: NaiveDate,
    pub answers: &'a AnswerRecord,
    pub scores: &'a ScoreMap,
    pub ranking: Vec<RankedEntry>,
    pub checklist: &'a [String],
    pub summary: &'a str,
}

/// Write the shareable summary text verbatim.
pub fn write_summary_txt(path: &Path, summary: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create summary file '{}': {e}", path.display()),
        )
    })?;
    file.write_all(summary.as_bytes()).map_err(|e| {
        AppError::new(2, format!("Failed to write summary file: {e}"))
    })?;
    Ok(())
}

/// Write the full match result as JSON.
pub fn write_results_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let export = build_export(run, chrono::Local::now().date_naive());

    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create results JSON '{}': {e}", path.display()),
        )
    })?;
    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::new(4, format!("Failed to serialize results JSON: {e}")))?;
    Ok(())
}

fn build_export(run: &RunOutput, generated: NaiveDate) -> MatchExport<'_> {
    MatchExport {
        tool: "pmatch",
        generated,
        answers: &run.answers,
        scores: &run.scores,
        ranking: run
            .ranked
            .iter()
            .map(|s| RankedEntry {
                id: s.program.id.as_str(),
                name: s.program.name,
                score: s.score,
            })
            .collect(),
        checklist: &run.checklist,
        summary: &run.summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_match;

    #[test]
    fn export_payload_serializes_with_catalog_ids() {
        let run = run_match(AnswerRecord::default());
        let generated = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let export = build_export(&run, generated);
        let json = serde_json::to_value(&export).unwrap();

        assert_eq!(json["tool"], "pmatch");
        assert_eq!(json["generated"], "2026-08-28");
        assert_eq!(json["ranking"].as_array().unwrap().len(), 4);
        assert!(json["scores"].get("mpp").is_some());
        assert!(json["summary"].as_str().unwrap().starts_with("Prospective Student Summary"));
    }

    #[test]
    fn ranking_rows_follow_ranked_order() {
        let run = run_match(AnswerRecord::default());
        let export = build_export(&run, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        for (row, ranked) in export.ranking.iter().zip(&run.ranked) {
            assert_eq!(row.id, ranked.program.id.as_str());
            assert_eq!(row.score, ranked.score);
        }
    }
}
