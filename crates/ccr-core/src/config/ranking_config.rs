use serde::{Deserialize, Serialize};

use super::defaults;
use crate::weights::{FactorWeights, MasterWeight};

/// Default weights used when the caller does not supply its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Quality/alignment blend, 0.0–1.0.
    pub master_weight: f64,
    /// Alignment factor weights. Renormalized to sum to 1 on load.
    pub factor_weights: FactorWeights,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            master_weight: defaults::DEFAULT_MASTER_WEIGHT,
            factor_weights: FactorWeights::default(),
        }
    }
}

impl RankingConfig {
    pub fn master(&self) -> MasterWeight {
        MasterWeight::new(self.master_weight)
    }
}
