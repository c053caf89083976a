//! Natural-language insight and recommendation models.

use serde::{Deserialize, Serialize};

/// Whether an insight is something to lean on or something to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Strength,
    Weakness,
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::Strength => write!(f, "strength"),
            InsightKind::Weakness => write!(f, "weakness"),
        }
    }
}

/// A single observation drawn from the match history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    pub fn strength(text: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Strength,
            text: text.into(),
        }
    }

    pub fn weakness(text: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Weakness,
            text: text.into(),
        }
    }
}

/// What the player should work on next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    GetStarted,
    MentalRoutine,
    SimplifyPlan,
    HighPercentage,
    MaintainConsistency,
    ProcessFocus,
}

/// The single focus suggestion for the next match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub focus: FocusArea,
    pub title: String,
    pub message: String,
}

impl Recommendation {
    pub fn new(focus: FocusArea, title: &str, message: &str) -> Self {
        Self {
            focus,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
