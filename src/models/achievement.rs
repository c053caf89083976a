//! Achievement model. Achievements are recomputed from the history on every view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Performance,
    Mental,
    Consistency,
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementCategory::Performance => write!(f, "performance"),
            AchievementCategory::Mental => write!(f, "mental"),
            AchievementCategory::Consistency => write!(f, "consistency"),
        }
    }
}

/// Unlock state of one milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub unlocked: bool,

    /// Timestamp of the match that reached the target
    pub unlocked_at: Option<DateTime<Utc>>,

    /// Percent towards the target (0-100)
    pub progress: u32,

    /// e.g. "3 / 5"
    pub progress_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_serialization() {
        let achievement = Achievement {
            id: "grit".to_string(),
            title: "Grinder".to_string(),
            description: "Win on a bad mental day".to_string(),
            category: AchievementCategory::Mental,
            unlocked: false,
            unlocked_at: None,
            progress: 0,
            progress_label: "0 / 1".to_string(),
        };

        let json = serde_json::to_string(&achievement).unwrap();
        assert!(json.contains("\"category\":\"mental\""));
        let back: Achievement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, achievement);
    }
}
