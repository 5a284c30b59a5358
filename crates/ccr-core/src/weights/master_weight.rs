use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults;

/// Blend between baseline quality (0.0) and the alignment composite (1.0).
/// Always within [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MasterWeight(f64);

impl MasterWeight {
    /// Pure baseline ordering.
    pub const QUALITY_ONLY: MasterWeight = MasterWeight(0.0);
    /// Pure alignment ordering.
    pub const ALIGNMENT_ONLY: MasterWeight = MasterWeight(1.0);

    /// Create a master weight, clamping to [0.0, 1.0]. Non-finite input maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Create from a 0–100 slider position.
    pub fn from_percent(percent: f64) -> Self {
        Self::new(percent / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Share given to the baseline quality score, `1 - value`.
    pub fn quality_share(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for MasterWeight {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_MASTER_WEIGHT)
    }
}

impl fmt::Display for MasterWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for MasterWeight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<MasterWeight> for f64 {
    fn from(w: MasterWeight) -> Self {
        w.0
    }
}
