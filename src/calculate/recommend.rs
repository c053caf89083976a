//! Focus recommendation for the next match.

use crate::models::{FocusArea, Match, Recommendation};

use super::{mean_one_decimal, most_recent, win_percent};

/// Matches the recommendation looks back over.
pub const LOOKBACK: usize = 5;

const LOW_SCORE: f64 = 6.0;
const STRUGGLING_WIN_RATE: u32 = 40;
const ROLLING_WIN_RATE: u32 = 80;

/// Pick one thing to work on from the most recent matches.
///
/// Rules are checked in priority order and the first match wins: mental
/// average, execution average, then win rate.
pub fn recommend_focus(matches: &[Match]) -> Recommendation {
    let recent = most_recent(matches, LOOKBACK);
    if recent.is_empty() {
        return Recommendation::new(
            FocusArea::GetStarted,
            "Log your first match",
            "Record a match with a quick reflection to start getting personalised focus areas.",
        );
    }

    let mental = mean_one_decimal(recent.iter().filter_map(|m| m.mental()));
    let execution = mean_one_decimal(recent.iter().filter_map(|m| m.execution().map(f64::from)));
    let rate = win_percent(recent.iter().copied());

    if mental.is_some_and(|v| v < LOW_SCORE) {
        Recommendation::new(
            FocusArea::MentalRoutine,
            "Build a between-points routine",
            "Your recent mental scores are low. Use a simple routine after every point: breathe, reset, pick your next target.",
        )
    } else if execution.is_some_and(|v| v < LOW_SCORE) {
        Recommendation::new(
            FocusArea::SimplifyPlan,
            "Simplify your game plan",
            "Execution has been slipping. Go into the next match with one or two tactics you can repeat under pressure.",
        )
    } else if rate <= STRUGGLING_WIN_RATE {
        Recommendation::new(
            FocusArea::HighPercentage,
            "Focus on high-percentage patterns",
            "Play crosscourt, use big targets and make your opponent hit one more ball before going for winners.",
        )
    } else if rate >= ROLLING_WIN_RATE {
        Recommendation::new(
            FocusArea::MaintainConsistency,
            "Maintain consistency",
            "You are on a strong run. Keep the same preparation and routines that got you here.",
        )
    } else {
        Recommendation::new(
            FocusArea::ProcessFocus,
            "Stay process-oriented",
            "Judge the next match on how well you stuck to your plan, not only on the scoreline.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_no_matches_prompts_first_log() {
        assert_eq!(recommend_focus(&[]).focus, FocusArea::GetStarted);
    }

    #[test]
    fn test_mental_takes_priority() {
        let matches = vec![
            with_execution(with_mental(loss(1), 4.0), 3),
            with_execution(with_mental(loss(2), 5.0), 3),
        ];
        assert_eq!(recommend_focus(&matches).focus, FocusArea::MentalRoutine);
    }

    #[test]
    fn test_execution_after_mental() {
        let matches = vec![
            with_execution(with_mental(win(1), 7.0), 4),
            with_execution(with_mental(win(2), 8.0), 5),
        ];
        assert_eq!(recommend_focus(&matches).focus, FocusArea::SimplifyPlan);
    }

    #[test]
    fn test_win_rate_bands() {
        let losing = vec![win(1), loss(2), loss(3), win(4), loss(5)];
        assert_eq!(recommend_focus(&losing).focus, FocusArea::HighPercentage);

        let rolling = vec![win(1), win(2), win(3), win(4), loss(5)];
        assert_eq!(recommend_focus(&rolling).focus, FocusArea::MaintainConsistency);

        let middling = vec![win(1), win(2), loss(3)];
        assert_eq!(recommend_focus(&middling).focus, FocusArea::ProcessFocus);
    }

    #[test]
    fn test_only_last_five_count() {
        // Old losses fall outside the window; the last five are all wins.
        let mut matches = vec![loss(1), loss(2), loss(3), loss(4)];
        matches.extend((5..10).map(win));
        assert_eq!(
            recommend_focus(&matches).focus,
            FocusArea::MaintainConsistency
        );
    }

    #[test]
    fn test_old_low_mental_outside_window_ignored() {
        let mut matches = vec![with_mental(loss(1), 2.0)];
        matches.extend((2..7).map(|d| with_mental(win(d), 8.0)));
        assert_eq!(
            recommend_focus(&matches).focus,
            FocusArea::MaintainConsistency
        );
    }
}
