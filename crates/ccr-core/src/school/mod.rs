//! The school (entity) model.
//!
//! `SchoolRecord` is the wire shape written by the dataset builder.
//! `School` wraps it with the donation metric resolved once at load time.

mod bias_label;
mod donation;
mod record;
mod tier;

pub use bias_label::BiasLabel;
pub use donation::DonationShare;
pub use record::SchoolRecord;
pub use tier::Tier;

use serde::{Deserialize, Serialize};

use crate::constants::UNRANKED_SENTINEL;

/// A school ready for ranking. Read-only input to the ranking core.
///
/// (De)serializes exactly like [`SchoolRecord`]; the resolved
/// [`DonationShare`] is derived, never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SchoolRecord", into = "SchoolRecord")]
pub struct School {
    record: SchoolRecord,
    donation: DonationShare,
}

impl School {
    pub fn handle(&self) -> &str {
        &self.record.handle
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Baseline ordinal rank. `UNRANKED_SENTINEL` (999) when not ranked.
    pub fn rank(&self) -> i32 {
        self.record.rank
    }

    pub fn is_unranked(&self) -> bool {
        self.record.rank == UNRANKED_SENTINEL || self.record.rank < 1
    }

    pub fn bias_score(&self) -> Option<f64> {
        self.record.bias_score
    }

    pub fn donation(&self) -> DonationShare {
        self.donation
    }

    pub fn fire_score(&self) -> Option<f64> {
        self.record.fire_score
    }

    pub fn dei_staff(&self) -> Option<u32> {
        self.record.dei_staff
    }

    pub fn record(&self) -> &SchoolRecord {
        &self.record
    }
}

impl From<SchoolRecord> for School {
    fn from(record: SchoolRecord) -> Self {
        let donation = DonationShare::resolve(record.fec_rep_pct, record.fec_bias_score);
        Self { record, donation }
    }
}

impl From<School> for SchoolRecord {
    fn from(school: School) -> Self {
        school.record
    }
}
