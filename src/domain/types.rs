//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - filled in incrementally by the TUI wizard
//! - loaded from / exported to JSON
//! - passed by value into the pure scoring pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Academic level selected on the profile step.
///
/// `Unset` serializes as the empty string, matching the questionnaire's
/// initial "Select…" state. An unset level contributes no level bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    #[serde(rename = "")]
    Unset,
    Undergraduate,
    Graduate,
}

impl Level {
    /// Display string; empty for `Unset` (the summary renders a dash instead).
    pub fn display_name(self) -> &'static str {
        match self {
            Level::Unset => "",
            Level::Undergraduate => "Undergraduate",
            Level::Graduate => "Graduate",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Level::Unset => Level::Undergraduate,
            Level::Undergraduate => Level::Graduate,
            Level::Graduate => Level::Unset,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Level::Unset => Level::Graduate,
            Level::Undergraduate => Level::Unset,
            Level::Graduate => Level::Undergraduate,
        }
    }
}

/// Self-rated skills, each on a 0–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub quant: u8,
    pub writing: u8,
    pub communication: u8,
    pub leadership: u8,
    pub data_viz: u8,
}

/// One session's complete questionnaire state.
///
/// Collection fields hold values drawn from the fixed vocabularies in
/// `crate::catalog`; insertion order is irrelevant for scoring but preserved
/// for display. The scoring pipeline treats this as an immutable snapshot —
/// only the front-ends mutate it.
///
/// Serde field names match the questionnaire's original JSON shape
/// (camelCase), and every field is defaulted so partial records load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub level: Level,
    pub profile_status: String,
    /// Collected on the profile step; not used by scoring or the summary.
    pub residency: String,
    /// Approximate GPA, domain 2.0–4.0.
    pub gpa: f64,
    /// Interest in accelerated/combined options, 0–5.
    pub accel_interest: u8,
    /// How soon graduate study is planned, 0–5.
    pub grad_timeline: u8,

    pub policy_areas: Vec<String>,
    pub skills: Skills,

    pub experiences: Vec<String>,
    pub goals: Vec<String>,
    pub priorities: Vec<String>,

    pub funding_needs: Vec<String>,
    /// Target yearly budget in thousands of dollars.
    pub budget_k: u32,
    /// Intended work hours per week during study.
    pub work_hours: u32,

    pub name: String,
    pub email: String,
    pub opt_in: bool,
    pub notes: String,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            level: Level::Unset,
            profile_status: String::new(),
            residency: String::new(),
            gpa: 3.4,
            accel_interest: 0,
            grad_timeline: 0,
            policy_areas: Vec::new(),
            skills: Skills::default(),
            experiences: Vec::new(),
            goals: Vec::new(),
            priorities: Vec::new(),
            funding_needs: Vec::new(),
            budget_k: 20,
            work_hours: 0,
            name: String::new(),
            email: String::new(),
            opt_in: false,
            notes: String::new(),
        }
    }
}

impl AnswerRecord {
    pub fn has_interest(&self, term: &str) -> bool {
        self.policy_areas.iter().any(|v| v == term)
    }

    pub fn has_experience(&self, term: &str) -> bool {
        self.experiences.iter().any(|v| v == term)
    }

    pub fn has_goal(&self, term: &str) -> bool {
        self.goals.iter().any(|v| v == term)
    }

    pub fn has_priority(&self, term: &str) -> bool {
        self.priorities.iter().any(|v| v == term)
    }
}

/// Key of a catalog program.
///
/// The variant order is the catalog order, which doubles as the tie-break
/// order when ranking (hence the `Ord` derive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramId {
    BaPpl,
    MinorPpl,
    AccelMpp,
    Mpp,
}

impl ProgramId {
    /// All program ids in catalog order.
    pub const ALL: [ProgramId; 4] = [
        ProgramId::BaPpl,
        ProgramId::MinorPpl,
        ProgramId::AccelMpp,
        ProgramId::Mpp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProgramId::BaPpl => "ba_ppl",
            ProgramId::MinorPpl => "minor_ppl",
            ProgramId::AccelMpp => "accel_mpp",
            ProgramId::Mpp => "mpp",
        }
    }
}

/// One catalog entry. Immutable, defined at process start.
#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub id: ProgramId,
    pub name: &'static str,
    pub level: &'static str,
    pub summary: &'static str,
    pub next_steps: &'static [&'static str],
}

/// Normalized fit score per program, each an integer in [0, 10].
///
/// Keyed by `ProgramId` so iteration order is the catalog order.
pub type ScoreMap = BTreeMap<ProgramId, u8>;

/// A catalog program paired with its normalized score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredProgram {
    pub program: &'static Program,
    pub score: u8,
}
