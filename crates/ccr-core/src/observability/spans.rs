//! Span definitions for the ranking path.

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($entity_count:expr, $master_weight:expr) => {
        tracing::info_span!(
            "ccr.ranking",
            entity_count = $entity_count,
            master_weight = $master_weight
        )
    };
}

/// Create a store-load span.
#[macro_export]
macro_rules! store_load_span {
    ($path:expr) => {
        tracing::info_span!("ccr.store_load", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RANKING: &str = "ccr.ranking";
    pub const STORE_LOAD: &str = "ccr.store_load";
}
