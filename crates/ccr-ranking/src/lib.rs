//! # ccr-ranking
//!
//! Adjustable composite ranking over school metrics.
//!
//! Pipeline: factors (normalize each metric to [0, 1]) → formula (alignment,
//! quality, composite) → assigner (sort, tie-break, dense 1..N ranks).
//! Every function is pure; `RankingEngine` only adds default weights and tracing.

pub mod assigner;
pub mod collation;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod quality;

pub use assigner::rank_schools;
pub use collation::compare_names;
pub use engine::RankingEngine;
pub use factors::normalize;
pub use formula::{alignment_score, composite_score, compute_breakdown, ScoreBreakdown};
