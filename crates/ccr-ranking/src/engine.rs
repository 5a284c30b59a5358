use ccr_core::config::RankingConfig;
use ccr_core::models::RankedSchool;
use ccr_core::school::School;
use ccr_core::store::SchoolStore;
use ccr_core::traits::IRanker;
use ccr_core::weights::{FactorWeights, MasterWeight};
use tracing::debug;

use crate::assigner;
use crate::formula::{self, ScoreBreakdown};

/// Ranking engine holding the default master and factor weights.
///
/// Stateless apart from its config: every call recomputes the full ranking
/// from the schools it is given.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    /// Create with explicit defaults. Factor weights are renormalized to sum to 1.
    pub fn new(config: RankingConfig) -> Self {
        let config = RankingConfig {
            factor_weights: config.factor_weights.normalized(),
            ..config
        };
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn master_weight(&self) -> MasterWeight {
        self.config.master()
    }

    pub fn factor_weights(&self) -> FactorWeights {
        self.config.factor_weights
    }

    /// Rank every school in a store with the default weights.
    pub fn rank_store(&self, store: &SchoolStore) -> Vec<RankedSchool> {
        self.rank(store.schools())
    }

    /// Score breakdown for one school under the default weights.
    pub fn explain(&self, school: &School) -> ScoreBreakdown {
        formula::compute_breakdown(school, self.master_weight(), &self.config.factor_weights)
    }
}

impl IRanker for RankingEngine {
    fn rank_with(
        &self,
        schools: &[School],
        master: MasterWeight,
        weights: &FactorWeights,
    ) -> Vec<RankedSchool> {
        let span = ccr_core::ranking_span!(schools.len(), master.value());
        let _guard = span.enter();

        let ranked = assigner::rank_schools(schools, master, weights);
        debug!(
            ranked = ranked.len(),
            top = ranked.first().map(|r| r.handle()).unwrap_or(""),
            "ranking complete"
        );
        ranked
    }

    fn rank(&self, schools: &[School]) -> Vec<RankedSchool> {
        self.rank_with(schools, self.master_weight(), &self.config.factor_weights)
    }
}
