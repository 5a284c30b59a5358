use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Five-band label for the messaging bias score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BiasLabel {
    #[serde(rename = "No Data")]
    NoData,
    #[serde(rename = "Strong Liberal")]
    StrongLiberal,
    #[serde(rename = "Liberal")]
    Liberal,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Conservative")]
    Conservative,
    #[serde(rename = "Strong Conservative")]
    StrongConservative,
}

impl BiasLabel {
    /// Band edges are inclusive on the upper side: -40, -15, 15, 40.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::NoData,
            Some(s) if s.is_nan() => Self::NoData,
            Some(s) if s <= -40.0 => Self::StrongLiberal,
            Some(s) if s <= -15.0 => Self::Liberal,
            Some(s) if s <= 15.0 => Self::Moderate,
            Some(s) if s <= 40.0 => Self::Conservative,
            Some(_) => Self::StrongConservative,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoData => "No Data",
            Self::StrongLiberal => "Strong Liberal",
            Self::Liberal => "Liberal",
            Self::Moderate => "Moderate",
            Self::Conservative => "Conservative",
            Self::StrongConservative => "Strong Conservative",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
