/// Normalized value every factor reports when its metric is missing.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Baseline rank written by the dataset builder for schools without a published rank.
pub const UNRANKED_SENTINEL: i32 = 999;

/// Worst baseline position that still carries quality signal.
/// Anything outside `1..=QUALITY_RANK_CEILING` is floored to it.
pub const QUALITY_RANK_CEILING: i32 = 150;

/// Tolerance used when checking that factor weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
