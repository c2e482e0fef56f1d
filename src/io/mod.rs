//! File input/output: answer records in, summary/results exports out.

pub mod answers;
pub mod export;
