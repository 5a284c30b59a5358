//! Compiled defaults for every config value.

/// Master weight the ranking starts from (30% alignment, 70% baseline quality).
pub const DEFAULT_MASTER_WEIGHT: f64 = 0.30;

pub const DEFAULT_BIAS_WEIGHT: f64 = 0.35;
pub const DEFAULT_FEC_WEIGHT: f64 = 0.25;
pub const DEFAULT_FIRE_WEIGHT: f64 = 0.25;
pub const DEFAULT_DEI_WEIGHT: f64 = 0.15;

pub const DEFAULT_SCHOOLS_PATH: &str = "data/schools.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";
