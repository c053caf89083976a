//! Short narrative summary of a single match.

use crate::models::{Match, MatchResult};

use super::result::is_three_setter;

const EXCELLENT: f64 = 8.0;
const SOLID: f64 = 6.0;
const INCONSISTENT: f64 = 4.0;
const TOUGH_MENTAL: f64 = 5.0;
const LOW: f64 = 6.0;

/// Build the paragraphs shown under a match: outcome, tactics (when there
/// is anything to say) and one takeaway.
pub fn generate_match_summary(m: &Match) -> Vec<String> {
    let mut paragraphs = vec![outcome_paragraph(m)];
    if let Some(tactics) = tactical_paragraph(m) {
        paragraphs.push(tactics);
    }
    paragraphs.push(takeaway_paragraph(m));
    paragraphs
}

fn outcome_paragraph(m: &Match) -> String {
    let opponent = m.opponent_names();
    let surface = m.surface;
    let score = m.score;

    match (m.result, is_three_setter(m)) {
        (MatchResult::Win, true) => format!(
            "You battled past {} in three sets ({}) on a {} court.",
            opponent, score, surface
        ),
        (MatchResult::Win, false) => format!(
            "You beat {} {} on a {} court.",
            opponent, score, surface
        ),
        (MatchResult::Loss, true) => format!(
            "You went the distance against {} but fell short in three sets ({}) on a {} court.",
            opponent, score, surface
        ),
        (MatchResult::Loss, false) => format!(
            "{} got the better of you {} on a {} court.",
            opponent, score, surface
        ),
        (MatchResult::Unfinished, _) => format!(
            "Your match against {} on a {} court was not completed.",
            opponent, surface
        ),
    }
}

fn tactical_paragraph(m: &Match) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(strategy) = m
        .plan
        .as_ref()
        .and_then(|p| p.strategy.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        clauses.push(format!(
            "the game plan was \"{}\"",
            strategy.trim_end_matches('.')
        ));
    }

    if let Some(execution) = m.execution() {
        let value = f64::from(execution);
        let band = if value >= EXCELLENT {
            "excellent"
        } else if value >= SOLID {
            "solid"
        } else if value <= INCONSISTENT {
            "inconsistent"
        } else {
            "mixed"
        };
        clauses.push(format!("execution was {} ({}/10)", band, execution));
    }

    if m.stuck_to_plan() == Some(false) {
        clauses.push("you drifted away from the plan at times".to_string());
    }

    if let Some(mental) = m.mental() {
        if mental >= EXCELLENT {
            clauses.push(format!(
                "your mental game was excellent ({}/10)",
                format_score(mental)
            ));
        } else if mental <= TOUGH_MENTAL {
            clauses.push(format!(
                "it was a challenging day mentally ({}/10)",
                format_score(mental)
            ));
        }
    }

    let key = m
        .scouting()
        .find_map(|s| s.key_to_win.as_deref())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| k.trim_end_matches('.'));

    match (clauses.is_empty(), key) {
        (true, None) => None,
        (true, Some(key)) => Some(format!(
            "Key to beating {} next time: {}.",
            m.opponent_names(),
            key
        )),
        (false, key) => {
            let mut paragraph = format!("Tactically, {}.", clauses.join("; "));
            if let Some(key) = key {
                paragraph.push_str(&format!(" Remember the key against them: {}.", key));
            }
            Some(paragraph)
        }
    }
}

fn takeaway_paragraph(m: &Match) -> String {
    let below = |v: Option<f64>| v.is_some_and(|v| v < LOW);
    let execution = m.execution().map(f64::from);

    let text = if m.is_loss() && below(execution) {
        "Next time, simplify your approach: pick one or two patterns you trust and commit to them."
    } else if below(m.mental()) {
        "Work on a between-points routine so one bad game does not turn into three."
    } else if below(m.energy().map(f64::from)) {
        "Energy was low. Prioritise sleep, food and a proper warm-up before your next match."
    } else if below(m.emotional_control().map(f64::from)) {
        "Find an emotional anchor (a breath, a cue word, a towel routine) to reset after tough points."
    } else if m.is_win() && execution.is_some_and(|v| v >= EXCELLENT) {
        "Replicate this: note what you did in preparation and tactically, and repeat it next match."
    } else if m.is_win() {
        "A good win to build on. Keep adding reflections to see which habits drive your results."
    } else {
        "Every match is data. Log a reflection and compare it with your wins to spot what to change."
    };
    text.to_string()
}

/// Render a rating without a trailing ".0".
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::models::{PrePlan, Reflection, ScoutingReport, Surface};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_execution_only_win() {
        let m = win(1)
            .with_scouting(ScoutingReport::named("Marta"))
            .with_reflection(Reflection {
                execution: Some(9),
                ..Default::default()
            });

        let summary = generate_match_summary(&m);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0], "You beat Marta 6-4, 6-4 on a hard court.");
        assert!(summary[1].contains("execution was excellent (9/10)"));
        assert!(summary[2].starts_with("Replicate this"));
    }

    #[test]
    fn test_bare_match_has_two_paragraphs() {
        let summary = generate_match_summary(&three_set_loss(1));
        assert_eq!(summary.len(), 2);
        assert_eq!(
            summary[0],
            "You went the distance against Opponent but fell short in three sets (6-4, 3-6, 2-6) on a hard court."
        );
        assert!(summary[1].starts_with("Every match is data"));
    }

    #[test]
    fn test_three_set_win_on_clay_doubles() {
        let m = on(three_set_win(1), Surface::Clay)
            .with_second_opponent(ScoutingReport::named("Bea"));
        let summary = generate_match_summary(&m);
        assert_eq!(
            summary[0],
            "You battled past Opponent & Bea in three sets (4-6, 6-3, 6-2) on a clay court."
        );
        assert!(summary[1].starts_with("A good win to build on"));
    }

    #[test]
    fn test_unfinished_outcome() {
        let summary = generate_match_summary(&unfinished(1));
        assert!(summary[0].contains("was not completed"));
    }

    #[test]
    fn test_tactical_clauses_joined() {
        let m = loss(1)
            .with_scouting(ScoutingReport::default().with_key_to_win("Attack the backhand."))
            .with_plan(PrePlan {
                strategy: Some("Serve wide and come in.".to_string()),
                ..Default::default()
            })
            .with_reflection(Reflection {
                execution: Some(5),
                mental: Some(4.5),
                stuck_to_plan: Some(false),
                ..Default::default()
            });

        let summary = generate_match_summary(&m);
        assert_eq!(
            summary[1],
            "Tactically, the game plan was \"Serve wide and come in\"; execution was mixed (5/10); \
             you drifted away from the plan at times; it was a challenging day mentally (4.5/10). \
             Remember the key against them: Attack the backhand."
        );
        assert!(summary[2].starts_with("Next time, simplify"));
    }

    #[test]
    fn test_key_to_win_only() {
        let m = win(1).with_scouting(ScoutingReport::named("Jo").with_key_to_win("Be patient"));
        let summary = generate_match_summary(&m);
        assert_eq!(summary[1], "Key to beating Jo next time: Be patient.");
    }

    #[test]
    fn test_execution_bands() {
        let band = |e: u8| {
            let m = win(1).with_reflection(Reflection {
                execution: Some(e),
                ..Default::default()
            });
            generate_match_summary(&m)[1].clone()
        };
        assert!(band(8).contains("excellent (8/10)"));
        assert!(band(7).contains("solid (7/10)"));
        assert!(band(6).contains("solid (6/10)"));
        assert!(band(5).contains("mixed (5/10)"));
        assert!(band(4).contains("inconsistent (4/10)"));
    }

    #[test]
    fn test_takeaway_priority() {
        let reflect = |m: Match, r: Reflection| generate_match_summary(&m.with_reflection(r));

        let mental = reflect(
            loss(1),
            Reflection {
                mental: Some(5.0),
                energy: Some(3),
                ..Default::default()
            },
        );
        assert!(mental.last().unwrap().contains("between-points routine"));

        let energy = reflect(
            win(1),
            Reflection {
                energy: Some(4),
                emotional_control: Some(2),
                ..Default::default()
            },
        );
        assert!(energy.last().unwrap().starts_with("Energy was low"));

        let emotional = reflect(
            win(1),
            Reflection {
                emotional_control: Some(5),
                execution: Some(9),
                ..Default::default()
            },
        );
        assert!(emotional.last().unwrap().contains("emotional anchor"));

        let mid_mental = reflect(
            win(1),
            Reflection {
                mental: Some(6.5),
                ..Default::default()
            },
        );
        // 6.5 is neither excellent nor challenging: no tactical paragraph.
        assert_eq!(mid_mental.len(), 2);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9.0), "9");
        assert_eq!(format_score(7.3), "7.3");
        assert_eq!(format_score(4.5), "4.5");
    }
}
