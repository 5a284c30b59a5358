//! Observability for CCR.
//! `tracing` with `EnvFilter`, plus span helpers for the ranking path.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_level};
