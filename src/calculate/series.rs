//! Chart series over time. Points are always oldest first.

use crate::models::{ChartPoint, Match};

use super::{chronological, win_percent};

/// Trailing window for the rolling win rate.
pub const ROLLING_WINDOW: usize = 5;

/// Short axis label, e.g. "Mar 4".
pub const LABEL_FORMAT: &str = "%b %-d";

fn label(m: &Match) -> String {
    m.created_at.format(LABEL_FORMAT).to_string()
}

/// Rolling win rate over the last five matches up to and including each match.
pub fn win_rate_series(matches: &[Match]) -> Vec<ChartPoint> {
    let sorted = chronological(matches);
    sorted
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let start = (i + 1).saturating_sub(ROLLING_WINDOW);
            ChartPoint {
                label: label(m),
                value: win_percent(sorted[start..=i].iter().copied()) as f64,
            }
        })
        .collect()
}

/// Composite mental score for every match that has one.
pub fn mental_series(matches: &[Match]) -> Vec<ChartPoint> {
    chronological(matches)
        .into_iter()
        .filter_map(|m| {
            m.mental().map(|value| ChartPoint {
                label: label(m),
                value,
            })
        })
        .collect()
}

/// Execution score for every match that has one.
pub fn execution_series(matches: &[Match]) -> Vec<ChartPoint> {
    chronological(matches)
        .into_iter()
        .filter_map(|m| {
            m.execution().map(|value| ChartPoint {
                label: label(m),
                value: f64::from(value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    fn values(points: &[ChartPoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_win_rate_series_rolling_window() {
        let matches = vec![win(0), loss(1), win(2), win(3), loss(4), loss(5), loss(6)];
        let series = win_rate_series(&matches);

        assert_eq!(
            values(&series),
            vec![100.0, 50.0, 67.0, 75.0, 60.0, 40.0, 40.0]
        );
        assert_eq!(series[0].label, "Mar 1");
        assert_eq!(series[6].label, "Mar 7");
    }

    #[test]
    fn test_series_sort_regardless_of_input_order() {
        let matches = vec![
            with_mental(win(9), 9.0),
            with_mental(loss(2), 4.5),
            with_mental(win(5), 7.0),
        ];

        let mental = mental_series(&matches);
        assert_eq!(values(&mental), vec![4.5, 7.0, 9.0]);
        let labels: Vec<&str> = mental.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mar 3", "Mar 6", "Mar 10"]);

        let rolling = win_rate_series(&matches);
        assert_eq!(values(&rolling), vec![0.0, 50.0, 67.0]);
    }

    #[test]
    fn test_execution_series_skips_missing() {
        let matches = vec![with_execution(win(3), 8), loss(2), with_execution(loss(1), 3)];
        let series = execution_series(&matches);
        assert_eq!(values(&series), vec![3.0, 8.0]);
    }

    #[test]
    fn test_empty_series() {
        assert!(win_rate_series(&[]).is_empty());
        assert!(mental_series(&[]).is_empty());
        assert!(execution_series(&[]).is_empty());
    }
}
