use ccr_core::constants::QUALITY_RANK_CEILING;
use ccr_core::school::School;

/// Baseline quality score: `(151 - r) / 150`, with `r` floored to 150 when
/// the rank is outside `1..=150` (unranked schools included).
///
/// Range: (0.0, 1.0]. Rank 1 → 1.0, rank 150 → 1/150.
pub fn calculate(school: &School) -> f64 {
    from_rank(school.rank())
}

pub fn from_rank(rank: i32) -> f64 {
    let r = if (1..=QUALITY_RANK_CEILING).contains(&rank) {
        rank
    } else {
        QUALITY_RANK_CEILING
    };
    let ceiling = QUALITY_RANK_CEILING as f64;
    (ceiling + 1.0 - r as f64) / ceiling
}
