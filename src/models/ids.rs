//! Deterministic ID generation using SHA256 hashing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A deterministic entity ID derived from content hash.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Generate an EntityId from input fields.
    /// Uses SHA256 and takes the first 16 characters for brevity.
    pub fn generate(fields: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                hasher.update(b"|");
            }
            hasher.update(field.as_bytes());
        }
        let hash = hex::encode(hasher.finalize());
        Self(hash[..16].to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

/// Type alias for match IDs. Matches logged elsewhere keep their opaque store ID.
pub type MatchId = EntityId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_id_generation_deterministic() {
        let id1 = EntityId::generate(&["Rafa", "2025-06-15T10:00:00+00:00"]);
        let id2 = EntityId::generate(&["Rafa", "2025-06-15T10:00:00+00:00"]);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_match_id_different_inputs() {
        let id1 = EntityId::generate(&["Rafa", "2025-06-15T10:00:00+00:00"]);
        let id2 = EntityId::generate(&["Rafa", "2025-06-16T10:00:00+00:00"]);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_match_id_length_and_hex() {
        let id = EntityId::generate(&["opponent", "timestamp"]);
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_opaque_store_id_round_trip() {
        let json = "\"0b7c2a4e-store-row\"";
        let id: MatchId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "0b7c2a4e-store-row");
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
        assert_eq!(format!("{}", id), "0b7c2a4e-store-row");
        assert!(format!("{:?}", id).contains("0b7c2a4e"));
    }
}
