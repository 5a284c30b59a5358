//! Factor weights (alignment blend) and the master weight (quality/alignment blend).

mod factor;
mod factor_weights;
mod master_weight;

pub use factor::Factor;
pub use factor_weights::FactorWeights;
pub use master_weight::MasterWeight;
