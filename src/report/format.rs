//! Formatted terminal output for the match report.

use crate::domain::{AnswerRecord, ScoredProgram};

/// Format the full report header (who we scored and what they told us).
pub fn format_run_summary(a: &AnswerRecord) -> String {
    let mut out = String::new();

    out.push_str("=== pmatch - Program Match (advising-ready) ===\n");
    out.push_str(&format!(
        "Level: {} | GPA: {:.2} | accel interest: {}/5 | grad timeline: {}/5\n",
        label_or_dash(a.level.display_name()),
        a.gpa,
        a.accel_interest,
        a.grad_timeline,
    ));
    out.push_str(&format!(
        "Interests: {} | Goals: {} | Priorities: {}\n",
        a.policy_areas.len(),
        a.goals.len(),
        a.priorities.len(),
    ));

    out
}

/// Format the ranked score table.
pub fn format_score_table(ranked: &[ScoredProgram]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<44} {:<22} {:>5}\n",
        "program", "level", "score"
    ));
    out.push_str(&format!("{:-<44} {:-<22} {:-<5}\n", "", "", ""));

    for s in ranked {
        out.push_str(&format!(
            "{:<44} {:<22} {:>5}\n",
            truncate(s.program.name, 44),
            truncate(s.program.level, 22),
            s.score,
        ));
    }

    out
}

/// Format the top suggestions block: the top-2 names plus the leader's
/// summary and next steps.
pub fn format_top_suggestions(ranked: &[ScoredProgram]) -> String {
    let mut out = String::new();

    out.push_str("Top suggestions:\n");
    for s in ranked.iter().take(2) {
        out.push_str(&format!("- {} (score {})\n", s.program.name, s.score));
    }

    if let Some(best) = ranked.first() {
        out.push('\n');
        out.push_str(&format!("{}\n", best.program.summary));
        out.push_str("Next steps:\n");
        for (i, step) in best.program.next_steps.iter().enumerate() {
            out.push_str(&format!("{}. {step}\n", i + 1));
        }
    }

    out
}

/// Format the personalized advising checklist.
pub fn format_checklist(items: &[String]) -> String {
    let mut out = String::new();
    out.push_str("Advising checklist (personalized):\n");
    for q in items {
        out.push_str(&format!("- {q}\n"));
    }
    out
}

/// The static quick-plan footer shown after a full report.
pub fn format_quick_plan() -> String {
    let mut out = String::new();
    out.push_str("What's next (quick plan):\n");
    out.push_str("1. Skim sample coursework for your top program(s).\n");
    out.push_str("2. Book advising to confirm fit and timeline.\n");
    out.push_str("3. Line up one experience (internship, RA, service) this term.\n");
    out.push_str("4. Note funding deadlines; gather materials early.\n");
    out
}

fn label_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::rank;
    use crate::score::score;

    #[test]
    fn score_table_lists_all_programs() {
        let a = AnswerRecord::default();
        let ranked = rank(&score(&a));
        let table = format_score_table(&ranked);
        for s in &ranked {
            assert!(table.contains(&truncate(s.program.name, 44)));
        }
        // Header + rule + 4 rows.
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn top_suggestions_show_leader_next_steps() {
        let a = AnswerRecord::default();
        let ranked = rank(&score(&a));
        let block = format_top_suggestions(&ranked);
        assert!(block.contains(ranked[0].program.name));
        for step in ranked[0].program.next_steps {
            assert!(block.contains(step));
        }
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate("short", 10), "short");
        let long = "a".repeat(50);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('.'));
    }
}
