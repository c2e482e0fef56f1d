//! Checklist Builder: personalized advising questions.
//!
//! Starts from the fixed base list and conditionally prepends questions in a
//! fixed evaluation order. Each prepend pushes prior prepends further back,
//! so the last-evaluated triggered rule ends up first. The order below is
//! load-bearing for output stability — do not reorder.

use crate::catalog::{ADVISING_QUESTIONS, EXPERIENTIAL_PRIORITY};
use crate::domain::{AnswerRecord, ProgramId};

/// Maximum checklist length after de-duplication.
pub const MAX_QUESTIONS: usize = 10;

const GPA_QUESTION: &str =
    "What GPA range is typical, and what can I do now to strengthen my application?";
const QUANT_QUESTION: &str =
    "How can I build quantitative readiness (workshops, tutoring, course sequencing)?";
const ACCEL_TIMELINE_QUESTION: &str =
    "For the accelerated 5-year path, what timeline and prerequisites should I plan?";
const CLIENT_PROJECT_QUESTION: &str =
    "Which client projects and internships align with my interests this year?";
const MPP_APPLICATION_QUESTION: &str =
    "What does a compelling MPP application look like for my background?";
const BA_ELECTIVES_QUESTION: &str =
    "How do PPL electives line up with my interests and career goals?";
const MINOR_COMBINE_QUESTION: &str =
    "How can I combine the PPL minor with my primary major effectively?";
const ACCEL_COMPETITIVE_QUESTION: &str =
    "How competitive is the accelerated B.A./B.S. + MPP and how do I prepare?";

/// Build the ordered, de-duplicated checklist for this record and the
/// top-ranked program ids (up to 2).
pub fn build_checklist(a: &AnswerRecord, top: &[ProgramId]) -> Vec<String> {
    let mut qs: Vec<&str> = ADVISING_QUESTIONS.to_vec();

    if a.gpa < 3.2 {
        qs.insert(0, GPA_QUESTION);
    }
    if a.skills.quant < 3 {
        qs.insert(0, QUANT_QUESTION);
    }
    if a.accel_interest >= 3 {
        qs.insert(0, ACCEL_TIMELINE_QUESTION);
    }
    if a.has_priority(EXPERIENTIAL_PRIORITY) {
        qs.insert(0, CLIENT_PROJECT_QUESTION);
    }

    if top.contains(&ProgramId::Mpp) {
        qs.insert(0, MPP_APPLICATION_QUESTION);
    }
    if top.contains(&ProgramId::BaPpl) {
        qs.insert(0, BA_ELECTIVES_QUESTION);
    }
    if top.contains(&ProgramId::MinorPpl) {
        qs.insert(0, MINOR_COMBINE_QUESTION);
    }
    if top.contains(&ProgramId::AccelMpp) {
        qs.insert(0, ACCEL_COMPETITIVE_QUESTION);
    }

    // De-duplicate preserving first occurrence, then cap the length.
    let mut seen = std::collections::HashSet::new();
    qs.into_iter()
        .filter(|q| seen.insert(*q))
        .take(MAX_QUESTIONS)
        .map(str::to_string)
        .collect()
}
