//! `program-match` library crate.
//!
//! The binary (`pmatch`) is a thin wrapper around this library so that:
//!
//! - the scoring/ranking/checklist core is testable without spawning processes
//! - modules are reusable (e.g., a future web or desktop front-end)
//! - code stays easy to navigate as the project grows
//!
//! The core pipeline is purely functional: an `AnswerRecord` snapshot goes in,
//! scores, a ranking, a checklist, and a summary come out. All mutation lives
//! in the front-ends (CLI flags, TUI wizard).

pub mod app;
pub mod catalog;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod score;
pub mod tui;
