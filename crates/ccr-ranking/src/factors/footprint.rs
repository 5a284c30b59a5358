use ccr_core::constants::NEUTRAL_SCORE;
use ccr_core::school::School;

/// Staff count at which the footprint factor bottoms out.
const SATURATION_COUNT: f64 = 25.0;

/// DEI footprint factor: `max(0, 1 - count / 25)`.
///
/// Range: 0.0 – 1.0. Exactly 1.0 at zero staff, 0.0 from 25 staff up.
pub fn calculate(school: &School) -> f64 {
    match school.dei_staff() {
        Some(count) => from_count(count),
        None => NEUTRAL_SCORE,
    }
}

pub fn from_count(count: u32) -> f64 {
    (1.0 - count as f64 / SATURATION_COUNT).max(0.0)
}
