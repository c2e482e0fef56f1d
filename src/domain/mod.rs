//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the questionnaire answer record (`AnswerRecord`, `Skills`, `Level`)
//! - the static program catalog types (`Program`, `ProgramId`)
//! - pipeline outputs (`ScoreMap`, `ScoredProgram`)

pub mod types;

pub use types::*;
