use crate::models::RankedSchool;
use crate::school::School;
use crate::weights::{FactorWeights, MasterWeight};

/// Produces an adjusted ranking over a school collection.
///
/// Implementations must be pure: the same inputs always produce the same
/// output, and nothing is retained between calls.
pub trait IRanker: Send + Sync {
    /// Rank with explicit weights. `weights` is expected to sum to 1.
    fn rank_with(
        &self,
        schools: &[School],
        master: MasterWeight,
        weights: &FactorWeights,
    ) -> Vec<RankedSchool>;

    /// Rank with the implementation's default weights.
    fn rank(&self, schools: &[School]) -> Vec<RankedSchool>;
}
