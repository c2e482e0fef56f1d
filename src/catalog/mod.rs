//! Static catalog and vocabularies.
//!
//! Everything here is a read-only table defined at process start: the four
//! programs being matched against, the closed vocabularies for each
//! multi-select answer field, and the base advising questions. Scoring rules
//! match on exact strings, so the literals below are the single source of
//! truth for both the wizard's options and the rule conditions.

use crate::domain::{Program, ProgramId};

/// The four programs, in catalog (tie-break) order.
pub static PROGRAMS: [Program; 4] = [
    Program {
        id: ProgramId::BaPpl,
        name: "B.A. in Public Policy & Leadership",
        level: "Undergraduate",
        summary: "Broad leadership + policy foundation with experiential learning and strong writing/communication focus.",
        next_steps: &[
            "Review major requirements & plan an 8-semester map.",
            "Join policy/leadership orgs and pursue service or internships.",
            "Meet with advising to align electives to interests.",
        ],
    },
    Program {
        id: ProgramId::MinorPpl,
        name: "Minor in Public Policy & Leadership",
        level: "Undergraduate",
        summary: "Add a policy & leadership lens alongside another major; flexible path to complement your strengths.",
        next_steps: &[
            "Pair the minor with your main major\u{2019}s goals.",
            "Choose policy electives that fit your interests.",
            "Seek short internships or research projects.",
        ],
    },
    Program {
        id: ProgramId::AccelMpp,
        name: "Accelerated B.A./B.S. + MPP (Five-Year)",
        level: "Accelerated/Combined",
        summary: "Earn your bachelor\u{2019}s plus the MPP in five years\u{2014}best for strong quant prep and clear policy goals.",
        next_steps: &[
            "Confirm math/econ/statistics prep and timeline.",
            "Discuss fit & prerequisites with an advisor.",
            "Plan internships that align with policy goals.",
        ],
    },
    Program {
        id: ProgramId::Mpp,
        name: "Master of Public Policy (MPP)",
        level: "Graduate",
        summary: "Professional degree emphasizing analysis, evidence, and leadership for public problem-solving.",
        next_steps: &[
            "Map skill gaps (micro, stats, writing) and address them.",
            "Network with career services & alumni in your areas.",
            "Prep application materials keyed to target roles.",
        ],
    },
];

/// Look up a catalog program by id.
pub fn program(id: ProgramId) -> &'static Program {
    // PROGRAMS is in ProgramId order, so index by position.
    &PROGRAMS[id as usize]
}

/// Policy/academic interest areas (the `policyAreas` vocabulary).
pub const INTERESTS: [&str; 9] = [
    "Education",
    "Health",
    "Environment",
    "Economic Policy",
    "National Security",
    "Data/Analytics",
    "Social Entrepreneurship",
    "Behavioral Policy",
    "International Development",
];

/// Completed coursework / experiences vocabulary.
pub const EXPERIENCES: [&str; 7] = [
    "Intro Micro/Macro Economics",
    "Statistics",
    "Calculus",
    "Research Methods / RA",
    "Policy Internship / Work",
    "Student Org Leadership / Service",
    "Community Engagement / Volunteering",
];

/// Career/learning goals vocabulary.
pub const GOALS: [&str; 5] = [
    "Policy analysis / evidence-based decision-making",
    "Leadership / management in organizations",
    "Public or social sector career",
    "Consulting / advisory",
    "Data-driven product / program evaluation",
];

/// Learning priorities vocabulary.
pub const PRIORITIES: [&str; 6] = [
    "Smaller classes / faculty access",
    EXPERIENTIAL_PRIORITY,
    "Research opportunities with faculty",
    "Quant/analytics rigor",
    "Career services & employer pipelines",
    "Flexibility to double major or minor",
];

/// Shared by scoring, the checklist builder, and the priorities vocabulary.
pub const EXPERIENTIAL_PRIORITY: &str =
    "Experiential learning (client projects, internships)";

/// Funding interest vocabulary.
pub const FUNDING_NEEDS: [&str; 4] = [
    "Need-based aid",
    "Merit scholarships",
    "Graduate assistantships (for MPP)",
    "Work-study / part-time work",
];

/// Base advising questions, in fixed order. Personalized questions are
/// prepended ahead of these by the checklist builder.
pub const ADVISING_QUESTIONS: [&str; 8] = [
    "How do my current courses map to prerequisites or recommended prep?",
    "What internships or client projects fit my interests this year?",
    "How common is double majoring / minoring with Batten programs?",
    "What quantitative preparation is expected\u{2014}and how can I build it?",
    "What are typical class sizes and cohort collaboration norms?",
    "How does career services support internships and full-time roles?",
    "What scholarships, assistantships, or funding options could I pursue?",
    "Can I study abroad or participate in policy labs without delaying graduation?",
];

/// Profile-status options offered by the wizard ("" = unselected).
pub const STATUS_OPTIONS: [&str; 6] = [
    "",
    "High school junior/senior",
    "Current UVA student",
    "Transfer student",
    "Working professional",
    "Other/Not sure",
];

/// Residency options offered by the wizard ("" = unselected).
pub const RESIDENCY_OPTIONS: [&str; 4] = [
    "",
    "Virginia",
    "Non-Virginia (US)",
    "International",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_in_program_id_order() {
        for (idx, p) in PROGRAMS.iter().enumerate() {
            assert_eq!(p.id as usize, idx);
            assert_eq!(program(p.id).name, p.name);
        }
    }

    #[test]
    fn vocabularies_have_no_duplicates() {
        fn unique(v: &[&str]) -> bool {
            let mut seen = std::collections::HashSet::new();
            v.iter().all(|s| seen.insert(*s))
        }
        assert!(unique(&INTERESTS));
        assert!(unique(&EXPERIENCES));
        assert!(unique(&GOALS));
        assert!(unique(&PRIORITIES));
        assert!(unique(&FUNDING_NEEDS));
        assert!(unique(&ADVISING_QUESTIONS));
    }

    #[test]
    fn experiential_priority_is_in_vocabulary() {
        assert!(PRIORITIES.contains(&EXPERIENTIAL_PRIORITY));
    }
}
