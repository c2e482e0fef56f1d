//! Summary Formatter: the shareable plain-text block.
//!
//! The line layout here is an external contract consumed byte-for-byte by
//! clipboard/print collaborators. Changing any literal (including the
//! divider and the dash placeholder) breaks compatibility.

use crate::domain::{AnswerRecord, ScoredProgram};

/// Placeholder rendered for any empty/unset field.
const PLACEHOLDER: &str = "\u{2014}";

/// Divider under the title: fifteen em-dashes.
const DIVIDER: &str = "\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}\u{2014}";

/// Render the answer record and top recommendations as a fixed-layout block.
pub fn format_summary(a: &AnswerRecord, ranked: &[ScoredProgram]) -> String {
    let top = ranked
        .iter()
        .take(2)
        .map(|r| r.program.name)
        .collect::<Vec<_>>()
        .join("; ");

    let lines = [
        "Prospective Student Summary".to_string(),
        DIVIDER.to_string(),
        format!("Level: {}", or_dash(a.level.display_name())),
        format!("Status: {}", or_dash(&a.profile_status)),
        format!("GPA (approx): {:.2}", a.gpa),
        format!("Timeline to grad study: {}/5", a.grad_timeline),
        format!("Interests: {}", join_or_dash(&a.policy_areas)),
        format!(
            "Skills (0\u{2013}5): Quant {}, Writing {}, Comm {}, Leadership {}, DataViz {}",
            a.skills.quant,
            a.skills.writing,
            a.skills.communication,
            a.skills.leadership,
            a.skills.data_viz,
        ),
        format!("Experiences: {}", join_or_dash(&a.experiences)),
        format!("Goals: {}", join_or_dash(&a.goals)),
        format!("Priorities: {}", join_or_dash(&a.priorities)),
        format!(
            "Funding needs: {}; Budget intent: ~${}k/yr",
            join_or_dash(&a.funding_needs),
            a.budget_k,
        ),
        format!("Top Recommendations: {}", or_dash(&top)),
        String::new(),
        format!("Notes: {}", or_dash(&a.notes)),
    ];
    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use crate::report::rank;
    use crate::score::score;

    fn ranked_for(a: &AnswerRecord) -> Vec<ScoredProgram> {
        rank(&score(a))
    }

    #[test]
    fn default_record_renders_placeholders() {
        let a = AnswerRecord::default();
        let text = format_summary(&a, &ranked_for(&a));
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines[0], "Prospective Student Summary");
        assert_eq!(lines[1], DIVIDER);
        assert_eq!(lines[2], "Level: \u{2014}");
        assert_eq!(lines[3], "Status: \u{2014}");
        assert_eq!(lines[4], "GPA (approx): 3.40");
        assert_eq!(lines[5], "Timeline to grad study: 0/5");
        assert_eq!(lines[6], "Interests: \u{2014}");
        assert_eq!(
            lines[7],
            "Skills (0\u{2013}5): Quant 0, Writing 0, Comm 0, Leadership 0, DataViz 0"
        );
        assert_eq!(lines[8], "Experiences: \u{2014}");
        assert_eq!(lines[9], "Goals: \u{2014}");
        assert_eq!(lines[10], "Priorities: \u{2014}");
        assert_eq!(
            lines[11],
            "Funding needs: \u{2014}; Budget intent: ~$20k/yr"
        );
        assert!(lines[12].starts_with("Top Recommendations: "));
        assert_eq!(lines[13], "");
        assert_eq!(lines[14], "Notes: \u{2014}");
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn never_emits_undefined() {
        let a = AnswerRecord::default();
        let text = format_summary(&a, &ranked_for(&a));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn filled_record_renders_values() {
        let mut a = AnswerRecord::default();
        a.level = Level::Graduate;
        a.profile_status = "Working professional".to_string();
        a.gpa = 3.75;
        a.grad_timeline = 4;
        a.policy_areas = vec!["Health".to_string(), "Data/Analytics".to_string()];
        a.funding_needs = vec!["Merit scholarships".to_string()];
        a.budget_k = 45;
        a.notes = "Evening availability only.".to_string();

        let text = format_summary(&a, &ranked_for(&a));
        assert!(text.contains("Level: Graduate"));
        assert!(text.contains("Status: Working professional"));
        assert!(text.contains("GPA (approx): 3.75"));
        assert!(text.contains("Timeline to grad study: 4/5"));
        assert!(text.contains("Interests: Health, Data/Analytics"));
        assert!(text.contains("Funding needs: Merit scholarships; Budget intent: ~$45k/yr"));
        assert!(text.contains("Notes: Evening availability only."));
    }

    #[test]
    fn top_recommendations_joined_with_semicolons() {
        let mut a = AnswerRecord::default();
        a.level = Level::Graduate;
        a.gpa = 3.8;
        a.policy_areas = vec!["Data/Analytics".to_string()];
        let ranked = ranked_for(&a);
        let text = format_summary(&a, &ranked);

        let expected = format!(
            "Top Recommendations: {}; {}",
            ranked[0].program.name, ranked[1].program.name
        );
        assert!(text.contains(&expected));
    }
}
