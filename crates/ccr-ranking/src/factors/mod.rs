//! Per-factor normalizers. Each maps one raw metric onto [0.0, 1.0],
//! higher meaning more conservative-aligned, and returns exactly
//! `NEUTRAL_SCORE` (0.5) when the metric is missing.

pub mod bias;
pub mod fec;
pub mod fire;
pub mod footprint;

use ccr_core::school::School;
use ccr_core::weights::Factor;

/// Normalize one factor of a school.
pub fn normalize(school: &School, factor: Factor) -> f64 {
    match factor {
        Factor::Bias => bias::calculate(school),
        Factor::Fec => fec::calculate(school),
        Factor::Fire => fire::calculate(school),
        Factor::Dei => footprint::calculate(school),
    }
}
