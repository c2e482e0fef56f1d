//! The additive scoring rules.
//!
//! Each rule is independent: it inspects the answer record and adds a fixed
//! or answer-scaled weight to one or more program accumulators. Rules match
//! vocabulary strings exactly; unrecognized values contribute nothing.

use crate::catalog::EXPERIENTIAL_PRIORITY;
use crate::domain::{AnswerRecord, Level, ProgramId};

/// Raw per-program accumulators, prior to normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawScores {
    pub ba_ppl: f64,
    pub minor_ppl: f64,
    pub accel_mpp: f64,
    pub mpp: f64,
}

impl RawScores {
    /// Accumulator values in catalog order.
    pub fn entries(&self) -> [(ProgramId, f64); 4] {
        [
            (ProgramId::BaPpl, self.ba_ppl),
            (ProgramId::MinorPpl, self.minor_ppl),
            (ProgramId::AccelMpp, self.accel_mpp),
            (ProgramId::Mpp, self.mpp),
        ]
    }

    pub fn max(&self) -> f64 {
        self.ba_ppl
            .max(self.minor_ppl)
            .max(self.accel_mpp)
            .max(self.mpp)
    }
}

/// Apply every rule in the fixed sequence.
pub fn apply_all(a: &AnswerRecord, s: &mut RawScores) {
    level_rules(a, s);
    timeline_rules(a, s);
    gpa_rules(a, s);
    quant_rules(a, s);
    interest_rules(a, s);
    goal_rules(a, s);
    priority_rules(a, s);
}

/// Academic level match.
fn level_rules(a: &AnswerRecord, s: &mut RawScores) {
    match a.level {
        Level::Undergraduate => {
            s.ba_ppl += 4.0;
            s.minor_ppl += 3.0;
        }
        Level::Graduate => {
            s.mpp += 5.0;
        }
        Level::Unset => {}
    }
}

/// Wants graduate study soon.
fn timeline_rules(a: &AnswerRecord, s: &mut RawScores) {
    if a.grad_timeline >= 3 {
        s.mpp += 2.0;
        s.accel_mpp += 2.0;
    }
}

/// GPA thresholds, alone and combined with accelerated interest.
fn gpa_rules(a: &AnswerRecord, s: &mut RawScores) {
    if a.gpa >= 3.4 && a.accel_interest >= 3 {
        s.accel_mpp += 5.0;
    }
    if a.gpa >= 3.2 {
        s.mpp += 2.0;
        s.accel_mpp += 1.0;
    }
}

/// Core prep (econ/calc/stats) and self-rated quant skill.
fn quant_rules(a: &AnswerRecord, s: &mut RawScores) {
    let quant_boost = f64::from(a.skills.quant) * 1.4
        + if a.has_experience("Statistics") { 1.2 } else { 0.0 }
        + if a.has_experience("Calculus") { 1.0 } else { 0.0 }
        + if a.has_experience("Intro Micro/Macro Economics") { 1.0 } else { 0.0 };

    s.mpp += quant_boost * 0.9;
    s.accel_mpp += quant_boost * 0.8;
}

/// Interest-area alignment.
fn interest_rules(a: &AnswerRecord, s: &mut RawScores) {
    if a.has_interest("Data/Analytics") {
        s.mpp += 2.5;
        s.accel_mpp += 1.0;
    }
    if a.has_interest("Economic Policy") {
        s.mpp += 2.0;
        s.ba_ppl += 1.0;
    }
    if a.has_interest("Education") {
        s.ba_ppl += 2.0;
        s.minor_ppl += 1.0;
    }
    if a.has_interest("Environment") {
        s.ba_ppl += 1.0;
        s.mpp += 1.0;
    }
    if a.has_interest("Health") {
        s.mpp += 1.0;
        s.ba_ppl += 1.0;
    }
    if a.has_interest("National Security") {
        s.mpp += 1.0;
    }
    if a.has_interest("Social Entrepreneurship") {
        s.ba_ppl += 1.0;
    }
    if a.has_interest("International Development") {
        s.mpp += 1.0;
    }
}

/// Career/learning goal alignment.
fn goal_rules(a: &AnswerRecord, s: &mut RawScores) {
    if a.has_goal("Policy analysis / evidence-based decision-making") {
        s.mpp += 3.0;
    }
    if a.has_goal("Leadership / management in organizations") {
        s.ba_ppl += 2.0;
    }
    if a.has_goal("Public or social sector career") {
        s.mpp += 1.0;
        s.ba_ppl += 1.0;
    }
    if a.has_goal("Consulting / advisory") {
        s.mpp += 1.0;
    }
    if a.has_goal("Data-driven product / program evaluation") {
        s.mpp += 1.0;
        s.accel_mpp += 0.5;
    }
}

/// Learning priorities (softer weights). Career-services and funding
/// priorities intentionally carry no weight.
fn priority_rules(a: &AnswerRecord, s: &mut RawScores) {
    if a.has_priority("Quant/analytics rigor") {
        s.mpp += 1.2;
        s.accel_mpp += 0.8;
    }
    if a.has_priority(EXPERIENTIAL_PRIORITY) {
        s.ba_ppl += 1.0;
        s.mpp += 1.0;
    }
    if a.has_priority("Research opportunities with faculty") {
        s.mpp += 0.8;
    }
    if a.has_priority("Flexibility to double major or minor") {
        s.minor_ppl += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> AnswerRecord {
        let mut a = AnswerRecord::default();
        a.gpa = 2.0;
        a
    }

    #[test]
    fn level_bonus_undergraduate() {
        let mut a = quiet();
        a.level = Level::Undergraduate;
        let mut s = RawScores::default();
        apply_all(&a, &mut s);
        assert_eq!(s.ba_ppl, 4.0);
        assert_eq!(s.minor_ppl, 3.0);
        assert_eq!(s.mpp, 0.0);
    }

    #[test]
    fn gpa_and_accel_combined_threshold() {
        let mut a = quiet();
        a.gpa = 3.4;
        a.accel_interest = 3;
        let mut s = RawScores::default();
        apply_all(&a, &mut s);
        // +5 combined, +1 from the plain gpa rule.
        assert_eq!(s.accel_mpp, 6.0);
        assert_eq!(s.mpp, 2.0);

        // Just under either threshold: combined rule stays quiet.
        let mut a2 = quiet();
        a2.gpa = 3.3;
        a2.accel_interest = 3;
        let mut s2 = RawScores::default();
        apply_all(&a2, &mut s2);
        assert_eq!(s2.accel_mpp, 1.0);
    }

    #[test]
    fn quant_composite_weights() {
        let mut a = quiet();
        a.skills.quant = 2;
        a.experiences = vec!["Statistics".to_string(), "Calculus".to_string()];
        let mut s = RawScores::default();
        apply_all(&a, &mut s);
        let boost = 2.0 * 1.4 + 1.2 + 1.0;
        assert!((s.mpp - boost * 0.9).abs() < 1e-12);
        assert!((s.accel_mpp - boost * 0.8).abs() < 1e-12);
    }

    #[test]
    fn interest_weights_sum_per_program() {
        let mut a = quiet();
        a.policy_areas = vec![
            "Data/Analytics".to_string(),
            "Education".to_string(),
            "Behavioral Policy".to_string(), // carries no weight
        ];
        let mut s = RawScores::default();
        apply_all(&a, &mut s);
        assert!((s.mpp - 2.5).abs() < 1e-12);
        assert!((s.accel_mpp - 1.0).abs() < 1e-12);
        assert!((s.ba_ppl - 2.0).abs() < 1e-12);
        assert!((s.minor_ppl - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unweighted_priorities_stay_quiet() {
        let mut a = quiet();
        a.priorities = vec![
            "Career services & employer pipelines".to_string(),
            "Smaller classes / faculty access".to_string(),
        ];
        let mut s = RawScores::default();
        apply_all(&a, &mut s);
        assert_eq!(s, RawScores::default());
    }
}
