//! Logged match model.
//!
//! A `Match` is created once when the player logs it and can be edited later.
//! The analytics engine only ever reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{EntityId, MatchId};
use crate::calculate::derive_result;

/// Upper bound for every 0-10 self-rating.
pub const MAX_RATING: u8 = 10;

/// Court surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Hard => write!(f, "hard"),
            Surface::Clay => write!(f, "clay"),
            Surface::Grass => write!(f, "grass"),
        }
    }
}

/// Singles or doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Singles,
    Doubles,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "singles"),
            MatchType::Doubles => write!(f, "doubles"),
        }
    }
}

/// Opponent play-style tag used when scouting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    Pusher,
    BigHitter,
    Baseliner,
    ServeAndVolley,
    Counterpuncher,
    AllCourt,
}

impl std::fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayStyle::Pusher => write!(f, "Pusher"),
            PlayStyle::BigHitter => write!(f, "Big Hitter"),
            PlayStyle::Baseliner => write!(f, "Baseliner"),
            PlayStyle::ServeAndVolley => write!(f, "Serve & Volley"),
            PlayStyle::Counterpuncher => write!(f, "Counterpuncher"),
            PlayStyle::AllCourt => write!(f, "All-Court"),
        }
    }
}

/// Match outcome from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Unfinished,
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Win => write!(f, "win"),
            MatchResult::Loss => write!(f, "loss"),
            MatchResult::Unfinished => write!(f, "unfinished"),
        }
    }
}

/// Points won in a set tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tiebreak {
    pub player: Option<u32>,
    pub opponent: Option<u32>,
}

impl Tiebreak {
    /// Both sides' points, if the breaker was recorded in full.
    pub fn completed(&self) -> Option<(u32, u32)> {
        Some((self.player?, self.opponent?))
    }
}

/// One set slot. Played only when both game counts are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetScore {
    pub player: Option<u32>,
    pub opponent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<Tiebreak>,
}

impl SetScore {
    pub fn new(player: u32, opponent: u32) -> Self {
        Self {
            player: Some(player),
            opponent: Some(opponent),
            tiebreak: None,
        }
    }

    pub fn with_tiebreak(mut self, player: u32, opponent: u32) -> Self {
        self.tiebreak = Some(Tiebreak {
            player: Some(player),
            opponent: Some(opponent),
        });
        self
    }

    /// Game counts of a played set.
    pub fn games(&self) -> Option<(u32, u32)> {
        Some((self.player?, self.opponent?))
    }

    pub fn is_played(&self) -> bool {
        self.games().is_some()
    }

    /// Completed tiebreak points, if any.
    pub fn completed_tiebreak(&self) -> Option<(u32, u32)> {
        self.tiebreak.as_ref().and_then(Tiebreak::completed)
    }
}

impl std::fmt::Display for SetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.games() {
            Some((p, o)) => {
                write!(f, "{}-{}", p, o)?;
                if let Some((tp, to)) = self.completed_tiebreak() {
                    write!(f, "({}-{})", tp, to)?;
                }
                Ok(())
            }
            None => write!(f, "-"),
        }
    }
}

/// Set-by-set score with exactly three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    pub sets: [SetScore; 3],
}

impl MatchScore {
    pub fn new(sets: [SetScore; 3]) -> Self {
        Self { sets }
    }

    /// Build a score from played sets in order. Anything past the third set is ignored.
    pub fn from_games(games: &[(u32, u32)]) -> Self {
        let mut sets = [SetScore::default(); 3];
        for (slot, &(p, o)) in sets.iter_mut().zip(games.iter()) {
            *slot = SetScore::new(p, o);
        }
        Self { sets }
    }

    /// Played sets in slot order.
    pub fn played(&self) -> impl Iterator<Item = &SetScore> {
        self.sets.iter().filter(|s| s.is_played())
    }

    pub fn played_count(&self) -> usize {
        self.played().count()
    }

    pub fn has_completed_tiebreak(&self) -> bool {
        self.played().any(|s| s.completed_tiebreak().is_some())
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.played().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Scouting notes on one opponent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoutingReport {
    pub name: String,

    #[serde(default)]
    pub styles: Vec<PlayStyle>,

    /// Their main strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,

    /// Their main weakness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<String>,

    /// One-sentence strategy note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_to_win: Option<String>,
}

impl ScoutingReport {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_styles(mut self, styles: &[PlayStyle]) -> Self {
        self.styles = styles.to_vec();
        self
    }

    pub fn with_key_to_win(mut self, key: impl Into<String>) -> Self {
        self.key_to_win = Some(key.into());
        self
    }
}

/// Optional pre-match plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrePlan {
    pub strategy: Option<String>,
    pub target_weakness: Option<String>,
    pub focus_word: Option<String>,
    pub confidence: Option<u8>,
}

/// Optional post-match reflection. All ratings are 0-10.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reflection {
    pub energy: Option<u8>,
    pub focus: Option<u8>,
    pub emotional_control: Option<u8>,

    /// Composite mental score
    pub mental: Option<f64>,

    pub execution: Option<u8>,
    pub stuck_to_plan: Option<bool>,
    pub notes: Option<String>,
}

/// Record validation failures raised while loading stored matches.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("opponent name is empty")]
    MissingOpponent,

    #[error("{field} rating {value} is outside 0-10")]
    RatingOutOfRange { field: &'static str, value: f64 },

    #[error("{0} match has the wrong number of opponents")]
    OpponentCount(MatchType),
}

/// A logged tennis match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Opaque identifier
    pub id: MatchId,

    /// When the match was logged; the chronological ordering key
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub match_type: MatchType,

    pub surface: Surface,

    /// Scouting on the (first) opponent
    pub opponent: ScoutingReport,

    /// Second opponent in doubles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_opponent: Option<ScoutingReport>,

    pub score: MatchScore,

    /// Cached `derive_result(&score)`, stored for cheap filtering
    pub result: MatchResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PrePlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<Reflection>,
}

impl Match {
    /// Create a singles match, deriving its result from the score.
    pub fn new(
        opponent: impl Into<String>,
        surface: Surface,
        score: MatchScore,
        created_at: DateTime<Utc>,
    ) -> Self {
        let opponent = ScoutingReport::named(opponent);
        let id = EntityId::generate(&[&opponent.name, &created_at.to_rfc3339()]);

        Self {
            id,
            created_at,
            match_type: MatchType::Singles,
            surface,
            opponent,
            partner_opponent: None,
            result: derive_result(&score),
            score,
            plan: None,
            reflection: None,
        }
    }

    /// Builder method to replace the opponent scouting, keeping the name if the new one is blank.
    pub fn with_scouting(mut self, mut scouting: ScoutingReport) -> Self {
        if scouting.name.is_empty() {
            scouting.name = std::mem::take(&mut self.opponent.name);
        }
        self.opponent = scouting;
        self
    }

    /// Builder method to turn this into a doubles match.
    pub fn with_second_opponent(mut self, scouting: ScoutingReport) -> Self {
        self.match_type = MatchType::Doubles;
        self.partner_opponent = Some(scouting);
        self
    }

    pub fn with_plan(mut self, plan: PrePlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_reflection(mut self, reflection: Reflection) -> Self {
        self.reflection = Some(reflection);
        self
    }

    /// Override the cached result (used for data imported with a stale cache).
    pub fn with_stored_result(mut self, result: MatchResult) -> Self {
        self.result = result;
        self
    }

    /// Opponent display name; doubles pairs are joined with `&`.
    pub fn opponent_names(&self) -> String {
        match &self.partner_opponent {
            Some(second) => format!("{} & {}", self.opponent.name, second.name),
            None => self.opponent.name.clone(),
        }
    }

    /// Scouting records for every opponent on the other side of the net.
    pub fn scouting(&self) -> impl Iterator<Item = &ScoutingReport> {
        std::iter::once(&self.opponent).chain(self.partner_opponent.iter())
    }

    pub fn is_win(&self) -> bool {
        self.result == MatchResult::Win
    }

    pub fn is_loss(&self) -> bool {
        self.result == MatchResult::Loss
    }

    pub fn mental(&self) -> Option<f64> {
        self.reflection.as_ref()?.mental
    }

    pub fn execution(&self) -> Option<u8> {
        self.reflection.as_ref()?.execution
    }

    pub fn energy(&self) -> Option<u8> {
        self.reflection.as_ref()?.energy
    }

    pub fn emotional_control(&self) -> Option<u8> {
        self.reflection.as_ref()?.emotional_control
    }

    pub fn stuck_to_plan(&self) -> Option<bool> {
        self.reflection.as_ref()?.stuck_to_plan
    }

    /// Refresh the cached result. Returns true if it changed.
    pub fn recompute_result(&mut self) -> bool {
        let derived = derive_result(&self.score);
        let changed = derived != self.result;
        self.result = derived;
        changed
    }

    /// Check the record is well-formed before it reaches the analytics.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.scouting().any(|s| s.name.trim().is_empty()) {
            return Err(MatchError::MissingOpponent);
        }

        let expected_second = self.match_type == MatchType::Doubles;
        if self.partner_opponent.is_some() != expected_second {
            return Err(MatchError::OpponentCount(self.match_type));
        }

        if let Some(plan) = &self.plan {
            check_rating("confidence", plan.confidence)?;
        }

        if let Some(r) = &self.reflection {
            check_rating("energy", r.energy)?;
            check_rating("focus", r.focus)?;
            check_rating("emotional_control", r.emotional_control)?;
            check_rating("execution", r.execution)?;
            if let Some(mental) = r.mental {
                if !mental.is_finite() || !(0.0..=MAX_RATING as f64).contains(&mental) {
                    return Err(MatchError::RatingOutOfRange {
                        field: "mental",
                        value: mental,
                    });
                }
            }
        }

        Ok(())
    }
}

fn check_rating(field: &'static str, value: Option<u8>) -> Result<(), MatchError> {
    match value {
        Some(v) if v > MAX_RATING => Err(MatchError::RatingOutOfRange {
            field,
            value: v as f64,
        }),
        _ => Ok(()),
    }
}
