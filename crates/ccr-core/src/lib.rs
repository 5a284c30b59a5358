//! # ccr-core
//!
//! Foundation crate for the CCR ranking engine.
//! Defines the school model, factor and master weights, errors, config,
//! constants, and tracing setup. `ccr-ranking` builds on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod school;
pub mod store;
pub mod traits;
pub mod weights;

// Re-export the most commonly used types at the crate root.
pub use config::CcrConfig;
pub use errors::{CcrError, CcrResult};
pub use models::RankedSchool;
pub use school::{BiasLabel, DonationShare, School, SchoolRecord, Tier};
pub use store::SchoolStore;
pub use weights::{Factor, FactorWeights, MasterWeight};
