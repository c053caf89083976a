//! Core data models for the match journal.

mod achievement;
mod ids;
mod insight;
mod match_record;
mod stats;

pub use achievement::*;
pub use ids::*;
pub use insight::*;
pub use match_record::*;
pub use stats::*;
