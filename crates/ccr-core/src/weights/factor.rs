use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four alignment factors blended into the alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Institutional messaging lean (`biasScore`).
    Bias,
    /// Employee donation split (`fecRepPct` / `fecBiasScore`).
    Fec,
    /// Free-speech score (`fireScore`).
    Fire,
    /// DEI staffing footprint (`deiStaff`).
    Dei,
}

impl Factor {
    /// All factors in blend order.
    pub const ALL: [Factor; 4] = [Factor::Bias, Factor::Fec, Factor::Fire, Factor::Dei];

    /// Config / wire key for this factor.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bias => "bias",
            Self::Fec => "fec",
            Self::Fire => "fire",
            Self::Dei => "dei",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
