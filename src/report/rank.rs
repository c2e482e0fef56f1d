//! Ranker: order the catalog by descending score.

use crate::catalog;
use crate::domain::{ProgramId, ScoreMap, ScoredProgram};

/// Attach each catalog program to its score and sort descending.
///
/// The sort is stable and the input sequence is the catalog order, so tied
/// programs keep their catalog position regardless of how the score map was
/// built.
pub fn rank(scores: &ScoreMap) -> Vec<ScoredProgram> {
    let mut ranked: Vec<ScoredProgram> = catalog::PROGRAMS
        .iter()
        .map(|p| ScoredProgram {
            program: p,
            score: scores.get(&p.id).copied().unwrap_or(0),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Ids of the first `n` ranked programs (for the checklist and summary).
pub fn top_ids(ranked: &[ScoredProgram], n: usize) -> Vec<ProgramId> {
    ranked.iter().take(n).map(|s| s.program.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoreMap;

    fn scores(ba: u8, minor: u8, accel: u8, mpp: u8) -> ScoreMap {
        ScoreMap::from([
            (ProgramId::BaPpl, ba),
            (ProgramId::MinorPpl, minor),
            (ProgramId::AccelMpp, accel),
            (ProgramId::Mpp, mpp),
        ])
    }

    #[test]
    fn sorts_descending() {
        let ranked = rank(&scores(3, 1, 7, 10));
        let ids: Vec<ProgramId> = ranked.iter().map(|s| s.program.id).collect();
        assert_eq!(
            ids,
            vec![ProgramId::Mpp, ProgramId::AccelMpp, ProgramId::BaPpl, ProgramId::MinorPpl]
        );
    }

    #[test]
    fn ties_keep_catalog_order() {
        let ranked = rank(&scores(5, 5, 5, 5));
        let ids: Vec<ProgramId> = ranked.iter().map(|s| s.program.id).collect();
        assert_eq!(ids, ProgramId::ALL.to_vec());
    }

    #[test]
    fn always_a_permutation_of_the_catalog() {
        let ranked = rank(&scores(0, 10, 0, 10));
        assert_eq!(ranked.len(), 4);
        let mut ids: Vec<ProgramId> = ranked.iter().map(|s| s.program.id).collect();
        ids.sort();
        assert_eq!(ids, ProgramId::ALL.to_vec());
        // Tied leaders: minor_ppl precedes mpp in the catalog.
        assert_eq!(ranked[0].program.id, ProgramId::MinorPpl);
        assert_eq!(ranked[1].program.id, ProgramId::Mpp);
    }

    #[test]
    fn missing_entries_default_to_zero() {
        let ranked = rank(&ScoreMap::new());
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|s| s.score == 0));
        assert_eq!(top_ids(&ranked, 2), vec![ProgramId::BaPpl, ProgramId::MinorPpl]);
    }
}
