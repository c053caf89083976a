//! # Match Journal
//!
//! Analytics for a tennis match journal: turns a list of logged matches
//! into records, streaks, grades, insights, summaries, chart series and
//! achievements.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, derived stats, insights, achievements)
//! - **calculate**: Pure statistics and derivation engine
//! - **storage**: JSONL match files and record validation
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
