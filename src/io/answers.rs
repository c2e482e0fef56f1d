//! Read an answer record from JSON.
//!
//! Field names are camelCase (the questionnaire's native shape) and every
//! field is optional in the file: anything missing takes the questionnaire
//! default, so a partial record is a valid input.

use std::fs::File;
use std::path::Path;

use crate::domain::AnswerRecord;
use crate::error::AppError;

/// Read and parse an answers JSON file.
pub fn read_answers(path: &Path) -> Result<AnswerRecord, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open answers JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::from_reader(file).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to parse answers JSON '{}': {e}", path.display()),
        )
    })
}

/// Load answers from an optional path; `None` yields the default record.
pub fn load_answers(path: Option<&Path>) -> Result<AnswerRecord, AppError> {
    match path {
        Some(p) => read_answers(p),
        None => Ok(AnswerRecord::default()),
    }
}
