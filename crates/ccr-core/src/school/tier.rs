use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::UNRANKED_SENTINEL;

/// Baseline-rank band used for grouping and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Tier {
    #[serde(rename = "Top 25")]
    Top25,
    #[serde(rename = "26-50")]
    Rank26To50,
    #[serde(rename = "51-100")]
    Rank51To100,
    #[serde(rename = "101-150")]
    Rank101To150,
    /// Unranked schools included for contrast.
    #[serde(rename = "Conservative Highlight")]
    ConservativeHighlight,
}

impl Tier {
    pub fn from_rank(rank: i32) -> Self {
        if rank < 1 || rank == UNRANKED_SENTINEL {
            return Self::ConservativeHighlight;
        }
        match rank {
            1..=25 => Self::Top25,
            26..=50 => Self::Rank26To50,
            51..=100 => Self::Rank51To100,
            _ => Self::Rank101To150,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top25 => "Top 25",
            Self::Rank26To50 => "26-50",
            Self::Rank51To100 => "51-100",
            Self::Rank101To150 => "101-150",
            Self::ConservativeHighlight => "Conservative Highlight",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
