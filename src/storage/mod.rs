//! Match file storage.
//!
//! This is the typed parse step in front of the analytics: it reads the
//! exported match history, validates every record and hands a clean
//! `Vec<Match>` to the calculation engine.

mod jsonl;

pub use jsonl::{JsonlReader, JsonlWriter};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Match, MatchError, MatchId};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record on line {line}: {source}")]
    Line {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// A record that parsed but failed validation.
#[derive(Debug)]
pub struct RejectedMatch {
    pub id: MatchId,
    pub error: MatchError,
}

/// Outcome of loading a match file.
#[derive(Debug, Default)]
pub struct LoadedMatches {
    /// Valid matches, ready for analysis
    pub matches: Vec<Match>,

    /// Records dropped by validation
    pub rejected: Vec<RejectedMatch>,

    /// Valid matches whose stored result disagrees with their score
    pub stale_results: Vec<MatchId>,
}

/// Load and validate every match in a JSONL file.
///
/// The score is authoritative: cached results that disagree with it are
/// recomputed in memory and their ids listed in `stale_results`. The file
/// itself is not touched (see `save_matches`).
pub fn load_matches(path: &Path) -> Result<LoadedMatches, StorageError> {
    let records: Vec<Match> = JsonlReader::new(path.to_path_buf()).read_all()?;
    let mut loaded = LoadedMatches::default();

    for mut m in records {
        if let Err(error) = m.validate() {
            warn!("Skipping match {}: {}", m.id, error);
            loaded.rejected.push(RejectedMatch { id: m.id, error });
            continue;
        }
        let stored = m.result;
        if m.recompute_result() {
            warn!(
                "Match {} stores result '{}' but its score says '{}'",
                m.id, stored, m.result
            );
            loaded.stale_results.push(m.id.clone());
        }
        loaded.matches.push(m);
    }

    info!(
        "Loaded {} matches from {:?} ({} rejected, {} stale results)",
        loaded.matches.len(),
        path,
        loaded.rejected.len(),
        loaded.stale_results.len()
    );
    Ok(loaded)
}

/// Recompute every cached result. Returns how many changed.
pub fn refresh_results(matches: &mut [Match]) -> usize {
    matches
        .iter_mut()
        .map(|m| m.recompute_result())
        .filter(|&changed| changed)
        .count()
}

/// Rewrite the match file.
pub fn save_matches(path: &Path, matches: &[Match]) -> Result<usize, StorageError> {
    JsonlWriter::new(path.to_path_buf()).write_all(matches)
}
