use serde::Serialize;

use crate::school::School;

/// A school annotated with its composite score and dense adjusted rank.
///
/// Serializes as the original record plus `compositeScore` and `adjustedRank`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    pub composite_score: f64,
    /// 1-based position after sorting; no gaps, no duplicates.
    pub adjusted_rank: usize,
}

impl RankedSchool {
    pub fn handle(&self) -> &str {
        self.school.handle()
    }
}
