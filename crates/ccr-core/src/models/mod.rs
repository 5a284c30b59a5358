//! Output models produced by the ranking engine.

pub mod ranked_school;

pub use ranked_school::RankedSchool;
