//! Statistics calculation engine.
//!
//! Computes derived metrics from a list of logged matches:
//! - Results, records, streaks and win-rate breakdowns
//! - Letter grades for performance metrics
//! - Strength/weakness insights and a focus recommendation
//! - Per-match narrative summaries
//! - Chart series and achievements
//!
//! Every function here is pure. Functions that care about ordering sort
//! their own copy by `created_at`, so callers may pass matches in any order.

pub mod achievements;
pub mod aggregate;
pub mod grading;
pub mod insights;
pub mod recommend;
pub mod report;
pub mod result;
pub mod series;
pub mod summary;

pub use achievements::evaluate_achievements;
pub use aggregate::{
    current_streak, execution_average, head_to_head, match_type_win_rates, mental_average,
    plan_adherence, record, style_win_rates, surface_win_rates, win_rate,
};
pub use grading::{grade, grade10, performance_grades};
pub use insights::{biggest_strength, biggest_weakness, generate_insights};
pub use recommend::recommend_focus;
pub use report::PlayerReport;
pub use result::derive_result;
pub use series::{execution_series, mental_series, win_rate_series};
pub use summary::generate_match_summary;

use crate::models::Match;

/// Rounded percentage of `part` over `total`; 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (part as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Rounded win percentage of a set of matches.
pub(crate) fn win_percent<'a, I>(matches: I) -> u32
where
    I: IntoIterator<Item = &'a Match>,
{
    let (wins, total) = matches
        .into_iter()
        .fold((0, 0), |(w, t), m| (w + m.is_win() as usize, t + 1));
    percent(wins, total)
}

/// Matches sorted oldest first. The sort is stable, so equal timestamps keep input order.
pub(crate) fn chronological(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by_key(|m| m.created_at);
    sorted
}

/// The `n` most recent matches, newest first.
pub fn most_recent(matches: &[Match], n: usize) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

/// Mean of the values, rounded to one decimal place.
pub(crate) fn mean_one_decimal<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some((sum / count as f64 * 10.0).round() / 10.0)
    }
}

/// Shared match builders for the calculation tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::models::{Match, MatchScore, Reflection, Surface};

    pub fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap() + Duration::days(n)
    }

    pub fn win(n: i64) -> Match {
        Match::new(
            "Opponent",
            Surface::Hard,
            MatchScore::from_games(&[(6, 4), (6, 4)]),
            day(n),
        )
    }

    pub fn loss(n: i64) -> Match {
        Match::new(
            "Opponent",
            Surface::Hard,
            MatchScore::from_games(&[(4, 6), (4, 6)]),
            day(n),
        )
    }

    pub fn unfinished(n: i64) -> Match {
        Match::new("Opponent", Surface::Hard, MatchScore::default(), day(n))
    }

    pub fn three_set_win(n: i64) -> Match {
        Match::new(
            "Opponent",
            Surface::Hard,
            MatchScore::from_games(&[(4, 6), (6, 3), (6, 2)]),
            day(n),
        )
    }

    pub fn three_set_loss(n: i64) -> Match {
        Match::new(
            "Opponent",
            Surface::Hard,
            MatchScore::from_games(&[(6, 4), (3, 6), (2, 6)]),
            day(n),
        )
    }

    pub fn with_mental(m: Match, mental: f64) -> Match {
        merge(m, |r| r.mental = Some(mental))
    }

    pub fn with_execution(m: Match, execution: u8) -> Match {
        merge(m, |r| r.execution = Some(execution))
    }

    pub fn with_energy(m: Match, energy: u8) -> Match {
        merge(m, |r| r.energy = Some(energy))
    }

    pub fn on(mut m: Match, surface: Surface) -> Match {
        m.surface = surface;
        m
    }

    fn merge(mut m: Match, f: impl FnOnce(&mut Reflection)) -> Match {
        let mut reflection = m.reflection.take().unwrap_or_default();
        f(&mut reflection);
        m.with_reflection(reflection)
    }
}
