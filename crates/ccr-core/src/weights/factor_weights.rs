use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Factor;
use crate::config::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::WeightError;

/// Per-factor contribution weights inside the alignment score.
///
/// Invariant expected by the compositor: all four are non-negative and sum to 1.
/// Use [`FactorWeights::normalized`] or [`FactorWeights::with_weight`] to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct FactorWeights {
    pub bias: f64,
    pub fec: f64,
    pub fire: f64,
    pub dei: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            bias: defaults::DEFAULT_BIAS_WEIGHT,
            fec: defaults::DEFAULT_FEC_WEIGHT,
            fire: defaults::DEFAULT_FIRE_WEIGHT,
            dei: defaults::DEFAULT_DEI_WEIGHT,
        }
    }
}

impl FactorWeights {
    pub fn new(bias: f64, fec: f64, fire: f64, dei: f64) -> Self {
        Self {
            bias,
            fec,
            fire,
            dei,
        }
    }

    /// Equal share for every factor.
    pub fn uniform() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    /// Weight for a single factor.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Bias => self.bias,
            Factor::Fec => self.fec,
            Factor::Fire => self.fire,
            Factor::Dei => self.dei,
        }
    }

    fn set(&mut self, factor: Factor, value: f64) {
        match factor {
            Factor::Bias => self.bias = value,
            Factor::Fec => self.fec = value,
            Factor::Fire => self.fire = value,
            Factor::Dei => self.dei = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.bias + self.fec + self.fire + self.dei
    }

    /// `(factor, weight)` pairs in blend order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Divide every weight by the sum.
    /// No-op when the sum is not a positive finite number.
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return self;
        }
        Self {
            bias: self.bias / sum,
            fec: self.fec / sum,
            fire: self.fire / sum,
            dei: self.dei / sum,
        }
    }

    /// Set one factor, then rescale all four (the one just set included) by `1 / sum`.
    ///
    /// If the new sum is not positive the current weights are returned unchanged,
    /// so dragging the last non-zero factor to zero is ignored.
    pub fn with_weight(self, factor: Factor, value: f64) -> Self {
        let mut next = self;
        next.set(factor, value);
        let sum = next.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return self;
        }
        next.normalized()
    }

    /// Slider helper: `percent` is a 0–100 position.
    pub fn with_percent(self, factor: Factor, percent: f64) -> Self {
        self.with_weight(factor, percent / 100.0)
    }

    /// Check the compositor's caller contract: finite, non-negative, sum of 1.
    pub fn validate(&self) -> Result<(), WeightError> {
        for (factor, value) in self.iter() {
            if !value.is_finite() {
                return Err(WeightError::NonFinite { factor, value });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { factor, value });
            }
        }
        let sum = self.sum();
        if sum == 0.0 {
            return Err(WeightError::ZeroSum);
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::SumMismatch { sum });
        }
        Ok(())
    }
}
