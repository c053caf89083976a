//! Match result derivation from the set-by-set score.

use crate::models::{Match, MatchResult, MatchScore, SetScore};

/// Which side took a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Winner of a played set. Level games fall back to a completed tiebreak;
/// without one the set counts for nobody.
pub fn set_winner(set: &SetScore) -> Option<Side> {
    let (player, opponent) = set.games()?;
    let (player, opponent) = if player == opponent {
        set.completed_tiebreak()?
    } else {
        (player, opponent)
    };

    match player.cmp(&opponent) {
        std::cmp::Ordering::Greater => Some(Side::Player),
        std::cmp::Ordering::Less => Some(Side::Opponent),
        std::cmp::Ordering::Equal => None,
    }
}

/// Derive win/loss/unfinished from the score.
///
/// Only played sets count. The player needs strictly more sets than the
/// opponent to win, so a 1-1 split (a match abandoned after two sets)
/// comes out as a loss. Stored results depend on that split, so it is kept
/// as is even though a draw would arguably be more accurate.
pub fn derive_result(score: &MatchScore) -> MatchResult {
    let (mut player_sets, mut opponent_sets) = (0u32, 0u32);
    for set in score.played() {
        match set_winner(set) {
            Some(Side::Player) => player_sets += 1,
            Some(Side::Opponent) => opponent_sets += 1,
            None => {}
        }
    }

    if player_sets == 0 && opponent_sets == 0 {
        MatchResult::Unfinished
    } else if player_sets > opponent_sets {
        MatchResult::Win
    } else {
        MatchResult::Loss
    }
}

/// True when all three sets were played.
pub fn is_three_setter(m: &Match) -> bool {
    m.score.played_count() == 3
}

/// True when the player dropped the first played set.
pub fn lost_first_set(m: &Match) -> bool {
    m.score
        .played()
        .next()
        .and_then(set_winner)
        .is_some_and(|side| side == Side::Opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tiebreak;

    fn score(sets: [Option<(u32, u32)>; 3]) -> MatchScore {
        let mut out = MatchScore::default();
        for (slot, set) in out.sets.iter_mut().zip(sets) {
            if let Some((p, o)) = set {
                *slot = SetScore::new(p, o);
            }
        }
        out
    }

    #[test]
    fn test_straight_sets_win() {
        assert_eq!(
            derive_result(&MatchScore::from_games(&[(6, 4), (6, 3)])),
            MatchResult::Win
        );
    }

    #[test]
    fn test_three_set_loss() {
        assert_eq!(
            derive_result(&MatchScore::from_games(&[(6, 4), (3, 6), (4, 6)])),
            MatchResult::Loss
        );
    }

    #[test]
    fn test_no_sets_is_unfinished() {
        assert_eq!(derive_result(&MatchScore::default()), MatchResult::Unfinished);
    }

    #[test]
    fn test_half_entered_sets_are_unfinished() {
        let mut s = MatchScore::default();
        s.sets[0].player = Some(6);
        s.sets[1].opponent = Some(2);
        assert_eq!(derive_result(&s), MatchResult::Unfinished);
    }

    #[test]
    fn test_unplayed_slot_position_is_irrelevant() {
        let a = score([Some((6, 4)), None, Some((6, 2))]);
        let b = score([None, Some((6, 4)), Some((6, 2))]);
        let c = score([Some((6, 4)), Some((6, 2)), None]);
        assert_eq!(derive_result(&a), MatchResult::Win);
        assert_eq!(derive_result(&a), derive_result(&b));
        assert_eq!(derive_result(&b), derive_result(&c));

        let d = score([None, Some((1, 6)), None]);
        let e = score([None, None, Some((1, 6))]);
        assert_eq!(derive_result(&d), MatchResult::Loss);
        assert_eq!(derive_result(&d), derive_result(&e));
    }

    #[test]
    fn test_split_sets_resolve_to_loss() {
        // Abandoned at one set all: not a majority, so it is recorded as a loss.
        let split = MatchScore::from_games(&[(6, 4), (4, 6)]);
        assert_eq!(derive_result(&split), MatchResult::Loss);
    }

    #[test]
    fn test_level_games_use_tiebreak() {
        let mut s = MatchScore::default();
        s.sets[0] = SetScore::new(6, 6).with_tiebreak(7, 4);
        assert_eq!(derive_result(&s), MatchResult::Win);

        s.sets[0].tiebreak = Some(Tiebreak {
            player: Some(5),
            opponent: None,
        });
        assert_eq!(derive_result(&s), MatchResult::Unfinished);
    }

    #[test]
    fn test_lost_first_set() {
        use crate::models::Surface;
        use chrono::{TimeZone, Utc};

        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let comeback = Match::new(
            "A",
            Surface::Hard,
            score([None, Some((3, 6)), Some((6, 1))]),
            at,
        );
        assert!(lost_first_set(&comeback));
        assert!(!is_three_setter(&comeback));

        let front_runner = Match::new(
            "A",
            Surface::Hard,
            MatchScore::from_games(&[(6, 3), (4, 6), (6, 1)]),
            at,
        );
        assert!(!lost_first_set(&front_runner));
        assert!(is_three_setter(&front_runner));
    }
}
