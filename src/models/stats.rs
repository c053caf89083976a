//! Derived statistics models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MatchResult, MatchType, PlayStyle, Surface};

/// Letter grade for a performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade a fraction of the maximum (0.0 to 1.0).
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.8 {
            Grade::A
        } else if ratio >= 0.6 {
            Grade::B
        } else if ratio >= 0.4 {
            Grade::C
        } else if ratio >= 0.2 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Win/loss record. Unfinished matches are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Run of identical results at the newest end of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "length", rename_all = "lowercase")]
pub enum Streak {
    #[default]
    None,
    Win(u32),
    Loss(u32),
    Unfinished(u32),
}

impl Streak {
    pub fn from_run(result: MatchResult, length: u32) -> Self {
        match result {
            MatchResult::Win => Streak::Win(length),
            MatchResult::Loss => Streak::Loss(length),
            MatchResult::Unfinished => Streak::Unfinished(length),
        }
    }

    /// Signed streak: positive for wins, negative for losses.
    /// An unfinished run reports its plain length.
    pub fn value(&self) -> i32 {
        match *self {
            Streak::None => 0,
            Streak::Win(n) => n as i32,
            Streak::Loss(n) => -(n as i32),
            Streak::Unfinished(n) => n as i32,
        }
    }

    pub fn len(&self) -> u32 {
        match *self {
            Streak::None => 0,
            Streak::Win(n) | Streak::Loss(n) | Streak::Unfinished(n) => n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Streak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Streak::None => write!(f, "-"),
            Streak::Win(n) => write!(f, "W{}", n),
            Streak::Loss(n) => write!(f, "L{}", n),
            Streak::Unfinished(n) => write!(f, "U{}", n),
        }
    }
}

/// Per-surface breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStat {
    pub surface: Surface,
    pub total: u32,
    pub wins: u32,
    /// Rounded percent
    pub win_rate: u32,
}

/// Per-opponent-style breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleStat {
    pub style: PlayStyle,
    pub total: u32,
    pub wins: u32,
    pub win_rate: u32,
}

/// Singles/doubles breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTypeStat {
    pub match_type: MatchType,
    pub total: u32,
    pub wins: u32,
    pub win_rate: u32,
}

/// Record against one opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub opponent: String,
    pub played: u32,
    pub record: Record,
    pub last_played: NaiveDate,
}

/// Letter grades shown on the dashboard. `None` means not enough data yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceGrades {
    pub consistency: Option<Grade>,
    pub clutch: Option<Grade>,
    pub momentum: Option<Grade>,
    pub mental: Option<Grade>,
    pub execution: Option<Grade>,
}

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short date label, e.g. "Mar 4"
    pub label: String,
    pub value: f64,
}
