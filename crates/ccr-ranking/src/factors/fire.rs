use ccr_core::constants::NEUTRAL_SCORE;
use ccr_core::school::School;

/// Free-speech factor: `clamp(score / 100, 0, 1)`.
pub fn calculate(school: &School) -> f64 {
    match school.fire_score() {
        Some(score) => (score / 100.0).clamp(0.0, 1.0),
        None => NEUTRAL_SCORE,
    }
}
