//! Aggregate statistics over a match history.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{
    HeadToHead, Match, MatchResult, MatchType, MatchTypeStat, PlayStyle, Record, Streak,
    StyleStat, Surface, SurfaceStat,
};

use super::{mean_one_decimal, percent, win_percent};

/// Rounded percentage of matches won; 0 for an empty list.
pub fn win_rate(matches: &[Match]) -> u32 {
    win_percent(matches)
}

/// Wins and losses. Unfinished matches are ignored.
pub fn record(matches: &[Match]) -> Record {
    matches
        .iter()
        .fold(Record::default(), |mut rec, m| {
            match m.result {
                MatchResult::Win => rec.wins += 1,
                MatchResult::Loss => rec.losses += 1,
                MatchResult::Unfinished => {}
            }
            rec
        })
}

/// Run of identical results ending at the most recent match.
///
/// Input order does not matter: matches are ordered newest first by
/// `created_at` before counting. Matches logged at the same instant keep
/// the order they were passed in.
pub fn current_streak(matches: &[Match]) -> Streak {
    let recent = super::most_recent(matches, matches.len());
    let Some(first) = recent.first() else {
        return Streak::None;
    };

    let length = recent
        .iter()
        .take_while(|m| m.result == first.result)
        .count() as u32;
    Streak::from_run(first.result, length)
}

/// Win rate per surface. Surfaces with no matches are left out.
pub fn surface_win_rates(matches: &[Match]) -> Vec<SurfaceStat> {
    let mut buckets: BTreeMap<Surface, (usize, usize)> = BTreeMap::new();
    for m in matches {
        let entry = buckets.entry(m.surface).or_default();
        entry.0 += 1;
        entry.1 += m.is_win() as usize;
    }

    buckets
        .into_iter()
        .map(|(surface, (total, wins))| SurfaceStat {
            surface,
            total: total as u32,
            wins: wins as u32,
            win_rate: percent(wins, total),
        })
        .collect()
}

/// Average composite mental score, one decimal. `None` when no match has one.
pub fn mental_average(matches: &[Match]) -> Option<f64> {
    mean_one_decimal(matches.iter().filter_map(Match::mental))
}

/// Average execution score, one decimal. `None` when no match has one.
pub fn execution_average(matches: &[Match]) -> Option<f64> {
    mean_one_decimal(matches.iter().filter_map(|m| m.execution().map(f64::from)))
}

/// Win rate per opponent play style.
///
/// A match counts once towards every distinct style tagged on either opponent.
pub fn style_win_rates(matches: &[Match]) -> Vec<StyleStat> {
    let mut buckets: BTreeMap<PlayStyle, (usize, usize)> = BTreeMap::new();
    for m in matches {
        let styles: BTreeSet<PlayStyle> = m
            .scouting()
            .flat_map(|s| s.styles.iter().copied())
            .collect();
        for style in styles {
            let entry = buckets.entry(style).or_default();
            entry.0 += 1;
            entry.1 += m.is_win() as usize;
        }
    }

    buckets
        .into_iter()
        .map(|(style, (total, wins))| StyleStat {
            style,
            total: total as u32,
            wins: wins as u32,
            win_rate: percent(wins, total),
        })
        .collect()
}

/// Win rate for singles and doubles, whichever were played.
pub fn match_type_win_rates(matches: &[Match]) -> Vec<MatchTypeStat> {
    let mut buckets: BTreeMap<MatchType, (usize, usize)> = BTreeMap::new();
    for m in matches {
        let entry = buckets.entry(m.match_type).or_default();
        entry.0 += 1;
        entry.1 += m.is_win() as usize;
    }

    buckets
        .into_iter()
        .map(|(match_type, (total, wins))| MatchTypeStat {
            match_type,
            total: total as u32,
            wins: wins as u32,
            win_rate: percent(wins, total),
        })
        .collect()
}

/// Record against each opponent, most played first.
///
/// Names are matched case-insensitively; the spelling from the most recent
/// meeting is the one reported. Doubles count against both opponents.
pub fn head_to_head(matches: &[Match]) -> Vec<HeadToHead> {
    let mut by_name: HashMap<String, HeadToHead> = HashMap::new();

    for m in super::chronological(matches) {
        for scouting in m.scouting() {
            let name = scouting.name.trim();
            let entry = by_name
                .entry(name.to_lowercase())
                .or_insert_with(|| HeadToHead {
                    opponent: name.to_string(),
                    played: 0,
                    record: Record::default(),
                    last_played: m.created_at.date_naive(),
                });

            entry.opponent = name.to_string();
            entry.played += 1;
            entry.last_played = m.created_at.date_naive();
            match m.result {
                MatchResult::Win => entry.record.wins += 1,
                MatchResult::Loss => entry.record.losses += 1,
                MatchResult::Unfinished => {}
            }
        }
    }

    let mut rows: Vec<HeadToHead> = by_name.into_values().collect();
    rows.sort_by(|a, b| {
        b.played
            .cmp(&a.played)
            .then_with(|| a.opponent.to_lowercase().cmp(&b.opponent.to_lowercase()))
    });
    rows
}

/// Percent of answered reflections where the player stuck to the plan.
pub fn plan_adherence(matches: &[Match]) -> Option<u32> {
    let answers: Vec<bool> = matches.iter().filter_map(Match::stuck_to_plan).collect();
    if answers.is_empty() {
        return None;
    }
    let kept = answers.iter().filter(|&&stuck| stuck).count();
    Some(percent(kept, answers.len()))
}
