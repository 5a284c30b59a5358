use ccr_core::constants::NEUTRAL_SCORE;
use ccr_core::school::{DonationShare, School};

/// Donation factor.
///
/// - `DirectShare(pct)`: `pct / 100`, unclamped (source is already 0–100).
/// - `DerivedBias(score)`: `clamp((score + 100) / 200, 0, 1)`.
/// - `Unknown`: neutral.
pub fn calculate(school: &School) -> f64 {
    from_share(school.donation())
}

pub fn from_share(share: DonationShare) -> f64 {
    match share {
        DonationShare::DirectShare(pct) => pct / 100.0,
        DonationShare::DerivedBias(score) => ((score + 100.0) / 200.0).clamp(0.0, 1.0),
        DonationShare::Unknown => NEUTRAL_SCORE,
    }
}
