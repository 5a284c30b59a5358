use ccr_core::constants::NEUTRAL_SCORE;
use ccr_core::school::School;

/// Half-width of the effective comparison window `[-80, 80]`.
const BIAS_WINDOW: f64 = 80.0;

/// Messaging bias factor: `clamp((score + 80) / 160, 0, 1)`.
///
/// Scores outside [-80, 80] clamp to the boundary.
pub fn calculate(school: &School) -> f64 {
    match school.bias_score() {
        Some(score) => from_score(score),
        None => NEUTRAL_SCORE,
    }
}

pub fn from_score(score: f64) -> f64 {
    ((score + BIAS_WINDOW) / (2.0 * BIAS_WINDOW)).clamp(0.0, 1.0)
}
