//! Error handling for CCR.
//! One error enum per subsystem, `thiserror` only, aggregated by `CcrError`.

pub mod config_error;
pub mod data_error;
pub mod weight_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use weight_error::WeightError;

/// Top-level error type. Every subsystem error converts into it via `?`.
#[derive(Debug, thiserror::Error)]
pub enum CcrError {
    #[error("weight error: {0}")]
    Weight(#[from] WeightError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] DataError),
}

/// Convenience alias used across the workspace.
pub type CcrResult<T> = Result<T, CcrError>;
