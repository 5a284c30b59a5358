/// The donation-share metric, resolved once from the two optional wire fields.
///
/// A direct Republican share wins over the derived bias score when both exist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DonationShare {
    /// Republican share of employee donations, 0–100.
    DirectShare(f64),
    /// Donation bias score, -100..100.
    DerivedBias(f64),
    #[default]
    Unknown,
}

impl DonationShare {
    pub fn resolve(rep_pct: Option<f64>, bias_score: Option<f64>) -> Self {
        match (rep_pct, bias_score) {
            (Some(pct), _) => Self::DirectShare(pct),
            (None, Some(score)) => Self::DerivedBias(score),
            (None, None) => Self::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
