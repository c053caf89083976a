//! Milestone achievements derived from the full match history.
//!
//! Nothing is stored: every call rescans the history, so edits and
//! deletions are reflected immediately.

use chrono::{DateTime, Utc};

use crate::models::{Achievement, AchievementCategory, Match};

use super::chronological;
use super::result::{is_three_setter, lost_first_set};

const STREAK_SHORT: usize = 5;
const STREAK_LONG: usize = 10;
const CALM_EMOTIONAL_CONTROL: u8 = 8;
const GRIT_MENTAL: f64 = 5.0;
const PRECISE_EXECUTION: u8 = 8;

/// Which qualifying list an achievement reads from.
#[derive(Debug, Clone, Copy)]
enum Source {
    WinStreak,
    Comebacks,
    ClutchWins,
    MentalControl,
    GritWins,
    Precision,
    Discipline,
}

struct Definition {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: AchievementCategory,
    source: Source,
    target: usize,
    binary: bool,
}

const DEFINITIONS: [Definition; 8] = [
    Definition {
        id: "streak_5",
        title: "On Fire",
        description: "Win 5 matches in a row",
        category: AchievementCategory::Performance,
        source: Source::WinStreak,
        target: STREAK_SHORT,
        binary: false,
    },
    Definition {
        id: "streak_10",
        title: "Unstoppable",
        description: "Win 10 matches in a row",
        category: AchievementCategory::Performance,
        source: Source::WinStreak,
        target: STREAK_LONG,
        binary: false,
    },
    Definition {
        id: "comeback",
        title: "Comeback Kid",
        description: "Win a match after losing the first set",
        category: AchievementCategory::Performance,
        source: Source::Comebacks,
        target: 1,
        binary: true,
    },
    Definition {
        id: "clutch_wins",
        title: "Clutch Performer",
        description: "Win 3 matches that went to a third set or a tiebreak",
        category: AchievementCategory::Performance,
        source: Source::ClutchWins,
        target: 3,
        binary: false,
    },
    Definition {
        id: "ice_veins",
        title: "Ice in the Veins",
        description: "Rate your emotional control 8+ in 5 matches",
        category: AchievementCategory::Mental,
        source: Source::MentalControl,
        target: 5,
        binary: false,
    },
    Definition {
        id: "grit",
        title: "Grinder",
        description: "Win a match with a mental score of 5 or lower",
        category: AchievementCategory::Mental,
        source: Source::GritWins,
        target: 1,
        binary: true,
    },
    Definition {
        id: "precision",
        title: "Precision Player",
        description: "Rate your execution 8+ in 3 matches",
        category: AchievementCategory::Consistency,
        source: Source::Precision,
        target: 3,
        binary: false,
    },
    Definition {
        id: "discipline",
        title: "Disciplined",
        description: "Stick to your game plan in 5 matches",
        category: AchievementCategory::Consistency,
        source: Source::Discipline,
        target: 5,
        binary: false,
    },
];

/// Everything the achievement definitions read, gathered in one chronological pass.
#[derive(Debug, Default)]
pub struct MilestoneScan<'a> {
    /// Longest run of consecutive wins ever
    pub longest_win_streak: usize,

    /// Match that completed the 5th win of the first 5+ streak
    pub fifth_streak_win: Option<&'a Match>,

    /// Match that completed the 10th win of the first 10+ streak
    pub tenth_streak_win: Option<&'a Match>,

    pub comebacks: Vec<&'a Match>,
    pub clutch_wins: Vec<&'a Match>,
    pub mental_control: Vec<&'a Match>,
    pub grit_wins: Vec<&'a Match>,
    pub precision: Vec<&'a Match>,
    pub discipline: Vec<&'a Match>,
}

impl<'a> MilestoneScan<'a> {
    pub fn scan(matches: &'a [Match]) -> Self {
        let mut scan = Self::default();
        let mut streak = 0usize;

        for m in chronological(matches) {
            if m.is_win() {
                streak += 1;
                scan.longest_win_streak = scan.longest_win_streak.max(streak);
                if streak == STREAK_SHORT && scan.fifth_streak_win.is_none() {
                    scan.fifth_streak_win = Some(m);
                }
                if streak == STREAK_LONG && scan.tenth_streak_win.is_none() {
                    scan.tenth_streak_win = Some(m);
                }

                if lost_first_set(m) {
                    scan.comebacks.push(m);
                }
                if is_three_setter(m) || m.score.has_completed_tiebreak() {
                    scan.clutch_wins.push(m);
                }
                if m.mental().is_some_and(|v| v <= GRIT_MENTAL) {
                    scan.grit_wins.push(m);
                }
            } else {
                streak = 0;
            }

            if m
                .emotional_control()
                .is_some_and(|v| v >= CALM_EMOTIONAL_CONTROL)
            {
                scan.mental_control.push(m);
            }
            if m.execution().is_some_and(|v| v >= PRECISE_EXECUTION) {
                scan.precision.push(m);
            }
            if m.stuck_to_plan() == Some(true) {
                scan.discipline.push(m);
            }
        }

        scan
    }

    fn list(&self, source: Source) -> &[&'a Match] {
        match source {
            Source::Comebacks => &self.comebacks,
            Source::ClutchWins => &self.clutch_wins,
            Source::MentalControl => &self.mental_control,
            Source::GritWins => &self.grit_wins,
            Source::Precision => &self.precision,
            Source::Discipline => &self.discipline,
            Source::WinStreak => &[],
        }
    }

    /// Qualifying count and the timestamp the target was first reached.
    fn progress(&self, def: &Definition) -> (usize, Option<DateTime<Utc>>) {
        match def.source {
            Source::WinStreak => {
                let reached = match def.target {
                    STREAK_SHORT => self.fifth_streak_win,
                    STREAK_LONG => self.tenth_streak_win,
                    _ => None,
                };
                (self.longest_win_streak, reached.map(|m| m.created_at))
            }
            source => {
                let list = self.list(source);
                let at = list.get(def.target - 1).map(|m| m.created_at);
                (list.len(), at)
            }
        }
    }
}

/// Evaluate every achievement against the history, in a fixed order.
pub fn evaluate_achievements(matches: &[Match]) -> Vec<Achievement> {
    let scan = MilestoneScan::scan(matches);

    DEFINITIONS
        .iter()
        .map(|def| {
            let (count, reached_at) = scan.progress(def);
            let unlocked = if def.binary {
                count > 0
            } else {
                count >= def.target
            };
            let shown = count.min(def.target);
            let progress_label = match def.source {
                Source::WinStreak => format!("{} / {} in a row", shown, def.target),
                _ => format!("{} / {}", shown, def.target),
            };

            Achievement {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                category: def.category,
                unlocked,
                unlocked_at: if unlocked { reached_at } else { None },
                progress: super::percent(shown, def.target),
                progress_label,
            }
        })
        .collect()
}
