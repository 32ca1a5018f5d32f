//! Score state models for all supported sport families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wickets never exceed this in a cricket innings.
pub const MAX_WICKETS: u8 = 10;

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

/// Sport family a match is scored under.
///
/// This is a closed set: adding a sport is a compile-time-checked addition
/// to every exhaustive match over it, not a runtime string comparison.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Over/ball/extras accounting (runs, wickets, legal balls).
    Cricket,
    /// Point/game/set progression with deuce-advantage logic
    /// (tennis, badminton, squash, and similar).
    Racket,
    /// A plain counter pair for sports without bespoke rules.
    Generic,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Cricket => "cricket",
            Self::Racket => "racket",
            Self::Generic => "generic",
        };
        write!(f, "{repr}")
    }
}

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

/// Outcome of a single cricket delivery, appended to the ball history
/// in delivery order and never reordered.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BallOutcome {
    /// A legal delivery scoring 0-6 runs.
    Runs(u8),
    /// A legal delivery taking a wicket.
    Wicket,
    /// An illegal wide delivery; does not count toward the over.
    Wide,
    /// An illegal no-ball delivery; does not count toward the over.
    NoBall,
}

impl BallOutcome {
    /// Short scorecard label: the run count, `W`, `WD`, or `NB`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Runs(n) => n.to_string(),
            Self::Wicket => "W".to_string(),
            Self::Wide => "WD".to_string(),
            Self::NoBall => "NB".to_string(),
        }
    }
}

/// Cricket innings score.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CricketScore {
    /// Total runs, including extras from wides and no-balls.
    pub runs: u32,
    /// Wickets fallen, capped at [`MAX_WICKETS`].
    pub wickets: u8,
    /// Legal deliveries bowled. Wides and no-balls are excluded.
    pub legal_balls: u32,
    /// Every delivery in order, legal or not.
    pub ball_history: Vec<BallOutcome>,
}

impl CricketScore {
    /// Completed overs, six legal balls each.
    #[must_use]
    pub const fn overs_completed(&self) -> u32 {
        self.legal_balls / BALLS_PER_OVER
    }

    /// Legal balls bowled in the over in progress.
    #[must_use]
    pub const fn balls_into_over(&self) -> u32 {
        self.legal_balls % BALLS_PER_OVER
    }

    /// Standard overs notation, e.g. `3.4` for 3 overs and 4 balls.
    #[must_use]
    pub fn overs_label(&self) -> String {
        format!("{}.{}", self.overs_completed(), self.balls_into_over())
    }

    /// The most recent deliveries shown as the "current over" view.
    ///
    /// The history is one flat append-only log, so this is simply the last
    /// six entries rather than a per-over segment.
    #[must_use]
    pub fn current_over(&self) -> &[BallOutcome] {
        let start = self.ball_history.len().saturating_sub(BALLS_PER_OVER as usize);
        &self.ball_history[start..]
    }
}

/// Point label within a racket-sport game.
///
/// Values are drawn only from this sequence; there is no numeric point
/// arithmetic anywhere in the engine.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointIndex {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl PointIndex {
    /// Scoreboard label: `0`, `15`, `30`, `40`, or `AD`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Love => "0",
            Self::Fifteen => "15",
            Self::Thirty => "30",
            Self::Forty => "40",
            Self::Advantage => "AD",
        }
    }

    /// One step along the ladder. Saturates at advantage; game wins are
    /// decided by the engine, never by stepping past the end.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Love => Self::Fifteen,
            Self::Fifteen => Self::Thirty,
            Self::Thirty => Self::Forty,
            Self::Forty | Self::Advantage => Self::Advantage,
        }
    }
}

/// Points within the game in progress.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameScore {
    pub p1: PointIndex,
    pub p2: PointIndex,
}

/// Games won within a single set.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetScore {
    pub p1_games: u32,
    pub p2_games: u32,
}

/// Racket-sport score: completed and in-progress sets plus the current game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RacketScore {
    /// Ordered sets; the set in progress is the last element.
    pub sets: Vec<SetScore>,
    /// Points within the game in progress.
    pub current_game: GameScore,
    pub p1_name: String,
    pub p2_name: String,
}

impl Default for RacketScore {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl RacketScore {
    /// A fresh score at love-all in the first set.
    #[must_use]
    pub fn new(p1_name: String, p2_name: String) -> Self {
        Self {
            sets: vec![SetScore::default()],
            current_game: GameScore::default(),
            p1_name,
            p2_name,
        }
    }

    /// The set in progress.
    ///
    /// Falls back to a zero set if the set list was emptied by a malformed
    /// document; the engine itself never produces an empty list.
    #[must_use]
    pub fn active_set(&self) -> SetScore {
        self.sets.last().copied().unwrap_or_default()
    }
}

/// Floor-clamped counter pair for sports without bespoke rules.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GenericScore {
    pub p1: u32,
    pub p2: u32,
}

/// Score state for a match: exactly one variant is active, selected by the
/// match's sport. The match exclusively owns its score state; it has no
/// identity of its own.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreState {
    Cricket(CricketScore),
    Racket(RacketScore),
    Generic(GenericScore),
}

impl ScoreState {
    /// The sport family this state belongs to.
    #[must_use]
    pub const fn sport(&self) -> Sport {
        match self {
            Self::Cricket(_) => Sport::Cricket,
            Self::Racket(_) => Sport::Racket,
            Self::Generic(_) => Sport::Generic,
        }
    }

    /// Zero-default state for a sport, carrying the participant display
    /// names where the sport's scoreboard shows them.
    #[must_use]
    pub fn initial(sport: Sport, p1_name: &str, p2_name: &str) -> Self {
        match sport {
            Sport::Cricket => Self::Cricket(CricketScore::default()),
            Sport::Racket => Self::Racket(RacketScore::new(p1_name.into(), p2_name.into())),
            Sport::Generic => Self::Generic(GenericScore::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overs_notation() {
        let score = CricketScore {
            legal_balls: 22,
            ..CricketScore::default()
        };
        assert_eq!(score.overs_completed(), 3);
        assert_eq!(score.balls_into_over(), 4);
        assert_eq!(score.overs_label(), "3.4");
    }

    #[test]
    fn test_current_over_is_last_six_entries() {
        let history = vec![
            BallOutcome::Runs(1),
            BallOutcome::Runs(2),
            BallOutcome::Wide,
            BallOutcome::Runs(0),
            BallOutcome::Wicket,
            BallOutcome::NoBall,
            BallOutcome::Runs(6),
            BallOutcome::Runs(4),
        ];
        let score = CricketScore {
            ball_history: history,
            ..CricketScore::default()
        };
        let over: Vec<String> = score.current_over().iter().map(BallOutcome::label).collect();
        assert_eq!(over, vec!["WD", "0", "W", "NB", "6", "4"]);
    }

    #[test]
    fn test_current_over_shorter_than_six() {
        let score = CricketScore {
            ball_history: vec![BallOutcome::Runs(4), BallOutcome::Wicket],
            ..CricketScore::default()
        };
        assert_eq!(score.current_over().len(), 2);
    }

    #[test]
    fn test_point_ladder() {
        assert_eq!(PointIndex::Love.next(), PointIndex::Fifteen);
        assert_eq!(PointIndex::Fifteen.next(), PointIndex::Thirty);
        assert_eq!(PointIndex::Thirty.next(), PointIndex::Forty);
        assert_eq!(PointIndex::Advantage.next(), PointIndex::Advantage);
    }

    #[test]
    fn test_point_labels() {
        assert_eq!(PointIndex::Love.label(), "0");
        assert_eq!(PointIndex::Forty.label(), "40");
        assert_eq!(PointIndex::Advantage.label(), "AD");
    }

    #[test]
    fn test_ball_labels() {
        assert_eq!(BallOutcome::Runs(4).label(), "4");
        assert_eq!(BallOutcome::Wicket.label(), "W");
        assert_eq!(BallOutcome::Wide.label(), "WD");
        assert_eq!(BallOutcome::NoBall.label(), "NB");
    }

    #[test]
    fn test_initial_state_matches_sport() {
        let state = ScoreState::initial(Sport::Racket, "alice", "bob");
        assert_eq!(state.sport(), Sport::Racket);
        match state {
            ScoreState::Racket(racket) => {
                assert_eq!(racket.sets.len(), 1);
                assert_eq!(racket.current_game, GameScore::default());
                assert_eq!(racket.p1_name, "alice");
            }
            _ => panic!("expected racket state"),
        }

        assert_eq!(ScoreState::initial(Sport::Cricket, "", "").sport(), Sport::Cricket);
        assert_eq!(ScoreState::initial(Sport::Generic, "", "").sport(), Sport::Generic);
    }

    #[test]
    fn test_score_state_serialization_tags() {
        let state = ScoreState::Cricket(CricketScore::default());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["kind"], "cricket");
        assert_eq!(json["runs"], 0);
    }
}
