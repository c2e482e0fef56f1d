//! Random answer-record generation.
//!
//! Produces a plausible, vocabulary-valid `AnswerRecord` for demos and
//! tests. Deterministic for a given seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::catalog;
use crate::domain::{AnswerRecord, Level, Skills};
use crate::error::AppError;

/// GPA is drawn from a normal around the questionnaire default, clamped to
/// the slider domain and rounded to one decimal like the slider step.
const GPA_MEAN: f64 = 3.4;
const GPA_STDDEV: f64 = 0.3;

/// Generate a random answer record from a seed.
pub fn generate_answers(seed: u64) -> Result<AnswerRecord, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let gpa_dist = Normal::new(GPA_MEAN, GPA_STDDEV)
        .map_err(|e| AppError::new(4, format!("GPA distribution error: {e}")))?;

    let level = match rng.gen_range(0..10) {
        0 => Level::Unset,
        1..=5 => Level::Undergraduate,
        _ => Level::Graduate,
    };

    let gpa = (gpa_dist.sample(&mut rng).clamp(2.0, 4.0) * 10.0).round() / 10.0;

    let skills = Skills {
        quant: rng.gen_range(0..=5),
        writing: rng.gen_range(0..=5),
        communication: rng.gen_range(0..=5),
        leadership: rng.gen_range(0..=5),
        data_viz: rng.gen_range(0..=5),
    };

    Ok(AnswerRecord {
        level,
        profile_status: pick_option(&mut rng, &catalog::STATUS_OPTIONS),
        residency: pick_option(&mut rng, &catalog::RESIDENCY_OPTIONS),
        gpa,
        accel_interest: rng.gen_range(0..=5),
        grad_timeline: rng.gen_range(0..=5),
        policy_areas: random_subset(&mut rng, &catalog::INTERESTS, 0.35),
        skills,
        experiences: random_subset(&mut rng, &catalog::EXPERIENCES, 0.35),
        goals: random_subset(&mut rng, &catalog::GOALS, 0.4),
        priorities: random_subset(&mut rng, &catalog::PRIORITIES, 0.35),
        funding_needs: random_subset(&mut rng, &catalog::FUNDING_NEEDS, 0.4),
        budget_k: 10 + 5 * rng.gen_range(0..=16),
        work_hours: 5 * rng.gen_range(0..=6),
        name: String::new(),
        email: String::new(),
        opt_in: rng.gen_bool(0.3),
        notes: String::new(),
    })
}

/// Pick one of the non-empty options (the leading "" means unselected).
fn pick_option(rng: &mut StdRng, options: &[&str]) -> String {
    options[rng.gen_range(1..options.len())].to_string()
}

/// Include each term independently; vocabulary order is preserved.
fn random_subset(rng: &mut StdRng, options: &[&str], p: f64) -> Vec<String> {
    options
        .iter()
        .filter(|_| rng.gen_bool(p))
        .map(|s| s.to_string())
        .collect()
}
