use ccr_core::school::School;
use ccr_core::weights::{FactorWeights, MasterWeight};
use serde::Serialize;

use crate::factors;
use crate::quality;

/// Alignment score: convex combination of the four normalized factors.
///
/// ```text
/// alignment = w.bias × bias + w.fec × fec + w.fire × fire + w.dei × footprint
/// ```
///
/// Weights are expected to sum to 1 and are not re-checked here. With
/// malformed weights the result is meaningless but still finite.
pub fn alignment_score(school: &School, weights: &FactorWeights) -> f64 {
    weights.bias * factors::bias::calculate(school)
        + weights.fec * factors::fec::calculate(school)
        + weights.fire * factors::fire::calculate(school)
        + weights.dei * factors::footprint::calculate(school)
}

/// Composite score used as the sole sort key.
///
/// ```text
/// composite = (1 - m) × quality + m × alignment
/// ```
pub fn composite_score(school: &School, master: MasterWeight, weights: &FactorWeights) -> f64 {
    blend(
        master,
        quality::calculate(school),
        alignment_score(school, weights),
    )
}

fn blend(master: MasterWeight, quality: f64, alignment: f64) -> f64 {
    (1.0 - master.value()) * quality + master.value() * alignment
}

/// Every intermediate value behind a composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub bias: f64,
    pub fec: f64,
    pub fire: f64,
    pub footprint: f64,
    pub alignment: f64,
    pub quality: f64,
    pub master_weight: f64,
    pub composite: f64,
}

/// Compute the composite score with a full breakdown of each factor.
///
/// `composite` matches [`composite_score`] bit for bit.
pub fn compute_breakdown(
    school: &School,
    master: MasterWeight,
    weights: &FactorWeights,
) -> ScoreBreakdown {
    let bias = factors::bias::calculate(school);
    let fec = factors::fec::calculate(school);
    let fire = factors::fire::calculate(school);
    let footprint = factors::footprint::calculate(school);

    let alignment =
        weights.bias * bias + weights.fec * fec + weights.fire * fire + weights.dei * footprint;
    let quality = quality::calculate(school);

    ScoreBreakdown {
        bias,
        fec,
        fire,
        footprint,
        alignment,
        quality,
        master_weight: master.value(),
        composite: blend(master, quality, alignment),
    }
}
