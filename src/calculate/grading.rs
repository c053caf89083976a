//! Letter grades for performance metrics.

use crate::models::{Grade, Match, PerformanceGrades};

use super::result::is_three_setter;
use super::{mean_one_decimal, most_recent, percent, win_percent};

/// Matches considered "recent" for consistency, mental and execution grades.
pub const RECENT_WINDOW: usize = 10;

/// Matches considered for momentum.
pub const MOMENTUM_WINDOW: usize = 5;

/// Recent matches with an execution score needed before grading consistency.
pub const MIN_CONSISTENCY_SAMPLE: usize = 3;

/// Three-set matches needed before grading clutch play.
pub const MIN_CLUTCH_SAMPLE: usize = 2;

/// Matches needed before grading momentum.
pub const MIN_MOMENTUM_SAMPLE: usize = 3;

/// Execution score that counts as a consistent performance.
const CONSISTENT_EXECUTION: u8 = 7;

/// Grade `value` out of `max`. Never fails: a non-positive or non-finite
/// `max` grades as F.
pub fn grade(value: f64, max: f64) -> Grade {
    if !max.is_finite() || max <= 0.0 {
        return Grade::F;
    }
    Grade::from_ratio(value / max)
}

/// Grade a 0-10 score.
pub fn grade10(value: f64) -> Grade {
    grade(value, 10.0)
}

/// Dashboard grades. Each grade is withheld until it has enough samples.
pub fn performance_grades(matches: &[Match]) -> PerformanceGrades {
    let recent = most_recent(matches, RECENT_WINDOW);

    let executions: Vec<u8> = recent.iter().filter_map(|m| m.execution()).collect();
    let consistency = (executions.len() >= MIN_CONSISTENCY_SAMPLE).then(|| {
        let consistent = executions
            .iter()
            .filter(|&&e| e >= CONSISTENT_EXECUTION)
            .count();
        grade(percent(consistent, executions.len()) as f64, 100.0)
    });

    let three_setters: Vec<&Match> = matches.iter().filter(|m| is_three_setter(m)).collect();
    let clutch = (three_setters.len() >= MIN_CLUTCH_SAMPLE)
        .then(|| grade(win_percent(three_setters.iter().copied()) as f64, 100.0));

    let last_five = &recent[..recent.len().min(MOMENTUM_WINDOW)];
    let momentum = (last_five.len() >= MIN_MOMENTUM_SAMPLE)
        .then(|| grade(win_percent(last_five.iter().copied()) as f64, 100.0));

    PerformanceGrades {
        consistency,
        clutch,
        momentum,
        mental: mean_one_decimal(recent.iter().filter_map(|m| m.mental())).map(grade10),
        execution: mean_one_decimal(executions.iter().map(|&e| f64::from(e))).map(grade10),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(grade(8.0, 10.0), Grade::A);
        assert_eq!(grade(6.0, 10.0), Grade::B);
        assert_eq!(grade(4.0, 10.0), Grade::C);
        assert_eq!(grade(2.0, 10.0), Grade::D);
        assert_eq!(grade(0.0, 10.0), Grade::F);
        assert_eq!(grade(80.0, 100.0), Grade::A);
        assert_eq!(grade(59.0, 100.0), Grade::C);
    }

    #[test]
    fn test_grade_is_total() {
        assert_eq!(grade(5.0, 0.0), Grade::F);
        assert_eq!(grade(5.0, f64::NAN), Grade::F);
        assert_eq!(grade(12.0, 10.0), Grade::A);
        assert_eq!(grade10(9.5), Grade::A);
    }

    #[test]
    fn test_grades_withheld_without_data() {
        assert_eq!(performance_grades(&[]), PerformanceGrades::default());

        let grades = performance_grades(&[win(1), win(2)]);
        assert_eq!(grades.momentum, None);
        assert_eq!(grades.consistency, None);
        assert_eq!(grades.clutch, None);
        assert_eq!(grades.mental, None);
    }

    #[test]
    fn test_momentum_uses_last_five() {
        let matches = vec![
            loss(1),
            loss(2),
            loss(3),
            win(4),
            win(5),
            win(6),
            win(7),
            loss(8),
        ];
        // Last five: W W W W L = 80%
        assert_eq!(performance_grades(&matches).momentum, Some(Grade::A));
    }

    #[test]
    fn test_consistency_needs_three_scores() {
        let two = vec![with_execution(win(1), 9), with_execution(win(2), 9), win(3)];
        assert_eq!(performance_grades(&two).consistency, None);

        let three = vec![
            with_execution(win(1), 9),
            with_execution(win(2), 7),
            with_execution(loss(3), 4),
        ];
        // 2 of 3 at 7+ = 67%
        assert_eq!(performance_grades(&three).consistency, Some(Grade::B));
    }

    #[test]
    fn test_clutch_needs_two_three_setters() {
        let one = vec![three_set_win(1), win(2), win(3)];
        assert_eq!(performance_grades(&one).clutch, None);

        let two = vec![three_set_win(1), three_set_loss(2)];
        assert_eq!(performance_grades(&two).clutch, Some(Grade::C));
    }

    #[test]
    fn test_mental_and_execution_grades() {
        let matches = vec![
            with_execution(with_mental(win(1), 8.5), 5),
            with_execution(with_mental(win(2), 7.5), 6),
        ];
        let grades = performance_grades(&matches);
        assert_eq!(grades.mental, Some(Grade::A));
        assert_eq!(grades.execution, Some(Grade::C));
    }
}
