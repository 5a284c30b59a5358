//! Trait seams between ccr-core and the engine crates.

pub mod ranker;

pub use ranker::IRanker;
