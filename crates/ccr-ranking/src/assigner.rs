//! Rank assigner: composite score → sort → tie-break → dense 1..N ranks.

use std::cmp::Ordering;

use ccr_core::models::RankedSchool;
use ccr_core::school::School;
use ccr_core::weights::{FactorWeights, MasterWeight};

use crate::collation;
use crate::formula;

/// Rank every school by composite score, best first.
///
/// Ties on the exact composite score fall back to ascending baseline rank,
/// then ascending name under locale-style collation. `adjusted_rank` is the 1-based position, so the
/// result is always a permutation of `1..=schools.len()`.
pub fn rank_schools(
    schools: &[School],
    master: MasterWeight,
    weights: &FactorWeights,
) -> Vec<RankedSchool> {
    let mut scored: Vec<(f64, &School)> = schools
        .iter()
        .map(|s| (formula::composite_score(s, master, weights), s))
        .collect();

    scored.sort_by(|a, b| compare(a.0, a.1, b.0, b.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(idx, (composite_score, school))| RankedSchool {
            school: school.clone(),
            composite_score,
            adjusted_rank: idx + 1,
        })
        .collect()
}

/// Strict ordering between two scored schools.
///
/// Scores compare with plain float equality; NaN falls back to IEEE total
/// order so the sort never sees an inconsistent comparator.
pub fn compare(a_score: f64, a: &School, b_score: f64, b: &School) -> Ordering {
    b_score
        .partial_cmp(&a_score)
        .unwrap_or_else(|| b_score.total_cmp(&a_score))
        .then_with(|| a.rank().cmp(&b.rank()))
        .then_with(|| collation::compare_names(a.name(), b.name()))
}
