use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{BiasLabel, Tier};

/// One school as written to `schools.json` by the dataset builder.
///
/// Only `handle`, `rank`, and `name` are required. Every metric is optional;
/// a missing metric means "no observation", never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    /// Stable identifier (the school's social handle).
    pub handle: String,
    /// Baseline ordinal rank; 999 when the school is not ranked.
    pub rank: i32,
    #[serde(default)]
    pub rank_display: String,
    pub name: String,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub state: String,

    // Messaging bias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bias_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tweet_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bias_label: Option<BiasLabel>,

    // Employee donations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fec_dem_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fec_rep_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fec_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fec_contributions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fec_bias_score: Option<f64>,

    // Free speech
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fire_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fire_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fire_grade: Option<String>,

    // DEI footprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dei_staff: Option<u32>,

    // Mean messaging score per era: 2012–2019, 2020–2023, 2024–2026.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phase1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phase2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phase3: Option<f64>,
}

impl SchoolRecord {
    /// A record with no metrics. `rank_display` and `tier` are derived from `rank`.
    pub fn new(handle: impl Into<String>, rank: i32, name: impl Into<String>) -> Self {
        let tier = Tier::from_rank(rank);
        let rank_display = if tier == Tier::ConservativeHighlight {
            "NR".to_string()
        } else {
            rank.to_string()
        };
        Self {
            handle: handle.into(),
            rank,
            rank_display,
            name: name.into(),
            highlight: tier == Tier::ConservativeHighlight,
            tier: Some(tier),
            state: String::new(),
            bias_score: None,
            tweet_count: None,
            bias_label: None,
            fec_dem_pct: None,
            fec_rep_pct: None,
            fec_total: None,
            fec_contributions: None,
            fec_bias_score: None,
            fire_rank: None,
            fire_score: None,
            fire_grade: None,
            dei_staff: None,
            phase1: None,
            phase2: None,
            phase3: None,
        }
    }

    /// Set the messaging bias score and its derived label.
    pub fn with_bias_score(mut self, score: f64) -> Self {
        self.bias_score = Some(score);
        self.bias_label = Some(BiasLabel::from_score(Some(score)));
        self
    }

    pub fn with_fec_rep_pct(mut self, pct: f64) -> Self {
        self.fec_rep_pct = Some(pct);
        self
    }

    pub fn with_fec_bias_score(mut self, score: f64) -> Self {
        self.fec_bias_score = Some(score);
        self
    }

    pub fn with_fire_score(mut self, score: f64) -> Self {
        self.fire_score = Some(score);
        self
    }

    pub fn with_dei_staff(mut self, count: u32) -> Self {
        self.dei_staff = Some(count);
        self
    }
}
