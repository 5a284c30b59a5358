use crate::weights::Factor;

/// Malformed factor weights.
///
/// The ranking core never raises these itself; they are produced by
/// `FactorWeights::validate` for callers that want to check the contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("factor weight `{factor}` is negative: {value}")]
    Negative { factor: Factor, value: f64 },

    #[error("factor weight `{factor}` is not finite: {value}")]
    NonFinite { factor: Factor, value: f64 },

    #[error("factor weights sum to zero")]
    ZeroSum,

    #[error("factor weights sum to {sum}, expected 1.0")]
    SumMismatch { sum: f64 },
}
