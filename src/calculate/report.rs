//! Full player report bundling every derived view of a match history.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    Achievement, ChartPoint, HeadToHead, Insight, InsightKind, Match, MatchTypeStat,
    PerformanceGrades, Recommendation, Record, Streak, StyleStat, SurfaceStat,
};

use super::{
    current_streak, evaluate_achievements, execution_average, execution_series,
    generate_insights, head_to_head, match_type_win_rates, mental_average, mental_series,
    performance_grades, plan_adherence, recommend_focus, record, style_win_rates,
    surface_win_rates, win_rate, win_rate_series,
};

/// Trend series for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub win_rate: Vec<ChartPoint>,
    pub mental: Vec<ChartPoint>,
    pub execution: Vec<ChartPoint>,
}

/// Everything the dashboard shows for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub matches: u32,
    pub record: Record,
    pub win_rate: u32,
    pub current_streak: Streak,
    pub mental_average: Option<f64>,
    pub execution_average: Option<f64>,
    pub plan_adherence: Option<u32>,
    pub surfaces: Vec<SurfaceStat>,
    pub styles: Vec<StyleStat>,
    pub match_types: Vec<MatchTypeStat>,
    pub head_to_head: Vec<HeadToHead>,
    pub grades: PerformanceGrades,
    pub insights: Vec<Insight>,
    pub biggest_strength: Option<Insight>,
    pub biggest_weakness: Option<Insight>,
    pub recommendation: Recommendation,
    pub trends: TrendSeries,
    pub achievements: Vec<Achievement>,
}

impl PlayerReport {
    /// Build a report from a match history in any order.
    pub fn build(matches: &[Match]) -> Self {
        let insights = generate_insights(matches);
        let first_of = |kind: InsightKind| insights.iter().find(|i| i.kind == kind).cloned();
        let biggest_strength = first_of(InsightKind::Strength);
        let biggest_weakness = first_of(InsightKind::Weakness);

        let report = Self {
            matches: matches.len() as u32,
            record: record(matches),
            win_rate: win_rate(matches),
            current_streak: current_streak(matches),
            mental_average: mental_average(matches),
            execution_average: execution_average(matches),
            plan_adherence: plan_adherence(matches),
            surfaces: surface_win_rates(matches),
            styles: style_win_rates(matches),
            match_types: match_type_win_rates(matches),
            head_to_head: head_to_head(matches),
            grades: performance_grades(matches),
            biggest_strength,
            biggest_weakness,
            insights,
            recommendation: recommend_focus(matches),
            trends: TrendSeries {
                win_rate: win_rate_series(matches),
                mental: mental_series(matches),
                execution: execution_series(matches),
            },
            achievements: evaluate_achievements(matches),
        };

        debug!(
            "Built report over {} matches ({} insights, {} achievements unlocked)",
            report.matches,
            report.insights.len(),
            report.unlocked_achievements().count()
        );
        report
    }

    pub fn unlocked_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.unlocked)
    }
}
