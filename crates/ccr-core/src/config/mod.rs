//! Configuration system for CCR.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.

pub mod ccr_config;
pub mod data_config;
pub mod defaults;
pub mod observability_config;
pub mod ranking_config;

pub use ccr_config::CcrConfig;
pub use data_config::DataConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
