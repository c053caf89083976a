//! Strength and weakness insights from cohort comparisons.
//!
//! Each rule splits the history on one metric and compares win rates.
//! Rules fire independently and their output keeps rule order.

use crate::models::{Insight, InsightKind, Match};

use super::result::is_three_setter;
use super::{percent, surface_win_rates, win_percent};

/// Matches needed before any insight is drawn.
pub const MIN_MATCHES: usize = 3;

/// Smallest cohort worth comparing.
const MIN_COHORT: usize = 2;

/// Win-rate gap (percentage points) that counts as meaningful.
const MIN_GAP: i64 = 20;

const HIGH_MENTAL: f64 = 7.0;
const HIGH_EXECUTION: u8 = 7;
const LOW_ENERGY: u8 = 6;
const LOW_ENERGY_LOSS_RATE: u32 = 60;
const LOW_COHORT_WIN_RATE: u32 = 40;
const STRONG_SURFACE_WIN_RATE: u32 = 60;
const MIN_SURFACE_MATCHES: u32 = 2;
const MIN_THREE_SETTERS: usize = 3;
const WEAK_DECIDER_WIN_RATE: u32 = 40;
const STRONG_DECIDER_WIN_RATE: u32 = 65;

/// Win rates of a high and low cohort, when both are big enough.
struct Split {
    high: u32,
    low: u32,
}

impl Split {
    fn new<F>(matches: &[Match], is_high: F) -> Option<Self>
    where
        F: Fn(&Match) -> Option<bool>,
    {
        let mut high = Vec::new();
        let mut low = Vec::new();
        for m in matches {
            match is_high(m) {
                Some(true) => high.push(m),
                Some(false) => low.push(m),
                None => {}
            }
        }

        if high.len() < MIN_COHORT || low.len() < MIN_COHORT {
            return None;
        }
        Some(Self {
            high: win_percent(high),
            low: win_percent(low),
        })
    }

    fn gap(&self) -> i64 {
        self.high as i64 - self.low as i64
    }
}

fn mental_rule(matches: &[Match], out: &mut Vec<Insight>) {
    let Some(split) = Split::new(matches, |m| m.mental().map(|v| v >= HIGH_MENTAL)) else {
        return;
    };
    if split.gap() >= MIN_GAP {
        out.push(Insight::strength(format!(
            "Your mental game drives results: you win {}% when your mental score is 7+ versus {}% below that.",
            split.high, split.low
        )));
    }
}

fn execution_rule(matches: &[Match], out: &mut Vec<Insight>) {
    let Some(split) = Split::new(matches, |m| m.execution().map(|v| v >= HIGH_EXECUTION)) else {
        return;
    };
    let gap = split.gap();
    if gap >= MIN_GAP {
        out.push(Insight::strength(format!(
            "When you execute your game plan (7+), you win {}% of matches versus {}% otherwise.",
            split.high, split.low
        )));
        if split.low < LOW_COHORT_WIN_RATE {
            out.push(Insight::weakness(format!(
                "Results fall away when execution slips below 7: only {}% wins.",
                split.low
            )));
        }
    } else if gap <= -MIN_GAP {
        out.push(Insight::weakness(format!(
            "Your execution ratings are not translating into wins ({}% when rated 7+, {}% below).",
            split.high, split.low
        )));
    }
}

fn energy_rule(matches: &[Match], out: &mut Vec<Insight>) {
    let tired: Vec<&Match> = matches
        .iter()
        .filter(|m| m.energy().is_some_and(|e| e < LOW_ENERGY))
        .collect();
    if tired.len() < MIN_COHORT {
        return;
    }

    let loss_rate = percent(tired.iter().filter(|m| m.is_loss()).count(), tired.len());
    if loss_rate >= LOW_ENERGY_LOSS_RATE {
        out.push(Insight::weakness(format!(
            "Low energy is costly: you lose {}% of matches when energy is below 6.",
            loss_rate
        )));
    }
}

fn surface_rule(matches: &[Match], out: &mut Vec<Insight>) {
    let best = surface_win_rates(matches)
        .into_iter()
        .filter(|s| s.total >= MIN_SURFACE_MATCHES)
        .reduce(|best, s| if s.win_rate > best.win_rate { s } else { best });

    if let Some(best) = best.filter(|s| s.win_rate >= STRONG_SURFACE_WIN_RATE) {
        out.push(Insight::strength(format!(
            "You are at your best on {} courts, winning {}% of {} matches.",
            best.surface, best.win_rate, best.total
        )));
    }
}

fn decider_rule(matches: &[Match], out: &mut Vec<Insight>) {
    let deciders: Vec<&Match> = matches.iter().filter(|m| is_three_setter(m)).collect();
    if deciders.len() < MIN_THREE_SETTERS {
        return;
    }

    let rate = win_percent(deciders.iter().copied());
    if rate < WEAK_DECIDER_WIN_RATE {
        out.push(Insight::weakness(format!(
            "Third sets are a struggle: you win only {}% of three-set matches.",
            rate
        )));
    } else if rate >= STRONG_DECIDER_WIN_RATE {
        out.push(Insight::strength(format!(
            "You thrive in long battles, winning {}% of three-set matches.",
            rate
        )));
    }
}

/// Compare cohorts of matches and describe the gaps worth knowing about.
/// Returns nothing for fewer than three matches.
pub fn generate_insights(matches: &[Match]) -> Vec<Insight> {
    let mut insights = Vec::new();
    if matches.len() < MIN_MATCHES {
        return insights;
    }

    mental_rule(matches, &mut insights);
    execution_rule(matches, &mut insights);
    energy_rule(matches, &mut insights);
    surface_rule(matches, &mut insights);
    decider_rule(matches, &mut insights);
    insights
}

/// First strength insight, if any.
pub fn biggest_strength(matches: &[Match]) -> Option<Insight> {
    first_of(matches, InsightKind::Strength)
}

/// First weakness insight, if any.
pub fn biggest_weakness(matches: &[Match]) -> Option<Insight> {
    first_of(matches, InsightKind::Weakness)
}

fn first_of(matches: &[Match], kind: InsightKind) -> Option<Insight> {
    generate_insights(matches)
        .into_iter()
        .find(|i| i.kind == kind)
}
