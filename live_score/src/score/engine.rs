//! Pure scoring transitions, one family of events per sport.
//!
//! Every transition takes the current state by reference and returns a new
//! state; nothing here mutates input or touches persistence. Out-of-range
//! counts are clamped rather than rejected, so the functions are total over
//! well-formed input. The only error is an event aimed at the wrong sport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{
    BallOutcome, CricketScore, GameScore, GenericScore, PointIndex, RacketScore, ScoreState,
    SetScore, Side, Sport, MAX_WICKETS,
};

/// Maximum runs creditable to a single legal delivery.
const MAX_RUNS_PER_BALL: u8 = 6;

/// A set is won at this many games with a two-game lead; at parity one
/// deciding game settles it.
const GAMES_PER_SET: u32 = 6;

/// Errors from applying a scoring event.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum EngineError {
    #[error("event does not apply to {sport} scoring")]
    SportMismatch { sport: Sport },
}

/// Result type for engine transitions.
pub type EngineResult<T> = Result<T, EngineError>;

/// Cricket scoring events.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CricketEvent {
    /// A legal delivery scoring 0-6 runs off the bat.
    Run(u8),
    /// A legal delivery taking a wicket.
    Wicket,
    /// A wide: one penalty run plus any extras, no legal ball bowled.
    Wide { extra: u32 },
    /// A no-ball: one penalty run plus any extras, no legal ball bowled.
    NoBall { extra: u32 },
}

/// Racket-sport scoring events.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RacketEvent {
    /// The given side wins a rally.
    Point(Side),
}

/// Generic counter events.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericEvent {
    /// Adjust one side's counter by a signed delta, clamped at zero.
    Adjust { side: Side, delta: i64 },
}

/// A scoring event, tagged by sport family.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreEvent {
    Cricket(CricketEvent),
    Racket(RacketEvent),
    Generic(GenericEvent),
}

impl ScoreEvent {
    /// The sport family this event belongs to.
    #[must_use]
    pub const fn sport(&self) -> Sport {
        match self {
            Self::Cricket(_) => Sport::Cricket,
            Self::Racket(_) => Sport::Racket,
            Self::Generic(_) => Sport::Generic,
        }
    }
}

/// Apply a scoring event to a score state, producing the next state.
///
/// The input is never mutated. An event from the wrong sport family is
/// rejected with [`EngineError::SportMismatch`] and causes no state change.
pub fn apply(state: &ScoreState, event: &ScoreEvent) -> EngineResult<ScoreState> {
    match (state, event) {
        (ScoreState::Cricket(score), ScoreEvent::Cricket(event)) => {
            Ok(ScoreState::Cricket(apply_cricket(score, *event)))
        }
        (ScoreState::Racket(score), ScoreEvent::Racket(RacketEvent::Point(side))) => {
            Ok(ScoreState::Racket(apply_racket(score, *side)))
        }
        (ScoreState::Generic(score), ScoreEvent::Generic(GenericEvent::Adjust { side, delta })) => {
            Ok(ScoreState::Generic(apply_generic(*score, *side, *delta)))
        }
        _ => Err(EngineError::SportMismatch {
            sport: state.sport(),
        }),
    }
}

/// Apply a cricket event to an innings score.
///
/// Runs off the bat clamp at six per delivery, wickets clamp at ten, and
/// the run total saturates rather than wrapping; every delivery is
/// appended to the ball history, legal or not.
#[must_use]
pub fn apply_cricket(score: &CricketScore, event: CricketEvent) -> CricketScore {
    let mut next = score.clone();
    match event {
        CricketEvent::Run(runs) => {
            let runs = runs.min(MAX_RUNS_PER_BALL);
            next.runs = next.runs.saturating_add(u32::from(runs));
            next.legal_balls += 1;
            next.ball_history.push(BallOutcome::Runs(runs));
        }
        CricketEvent::Wicket => {
            next.wickets = (next.wickets + 1).min(MAX_WICKETS);
            next.legal_balls += 1;
            next.ball_history.push(BallOutcome::Wicket);
        }
        CricketEvent::Wide { extra } => {
            next.runs = next.runs.saturating_add(1).saturating_add(extra);
            next.ball_history.push(BallOutcome::Wide);
        }
        CricketEvent::NoBall { extra } => {
            next.runs = next.runs.saturating_add(1).saturating_add(extra);
            next.ball_history.push(BallOutcome::NoBall);
        }
    }
    next
}

/// Award a rally to `scorer` and progress the point/game/set state.
///
/// Game progression follows standard deuce-advantage rules. A set is won at
/// six games with a two-game lead; at six-all the next game decides the set.
#[must_use]
pub fn apply_racket(score: &RacketScore, scorer: Side) -> RacketScore {
    let mut next = score.clone();
    let (mine, theirs) = match scorer {
        Side::P1 => (next.current_game.p1, next.current_game.p2),
        Side::P2 => (next.current_game.p2, next.current_game.p1),
    };

    use PointIndex::{Advantage, Forty};
    if (mine == Forty && theirs < Forty) || mine == Advantage {
        win_game(&mut next, scorer);
    } else if mine == Forty && theirs == Forty {
        set_points(&mut next.current_game, scorer, Advantage, theirs);
    } else if theirs == Advantage && mine == Forty {
        // Back to deuce.
        set_points(&mut next.current_game, scorer, mine, Forty);
    } else {
        set_points(&mut next.current_game, scorer, mine.next(), theirs);
    }
    next
}

fn set_points(game: &mut GameScore, scorer: Side, mine: PointIndex, theirs: PointIndex) {
    match scorer {
        Side::P1 => {
            game.p1 = mine;
            game.p2 = theirs;
        }
        Side::P2 => {
            game.p2 = mine;
            game.p1 = theirs;
        }
    }
}

fn win_game(score: &mut RacketScore, winner: Side) {
    score.current_game = GameScore::default();
    if score.sets.is_empty() {
        score.sets.push(SetScore::default());
    }
    let last = score.sets.len() - 1;
    let set = &mut score.sets[last];
    let (won, lost) = match winner {
        Side::P1 => {
            set.p1_games += 1;
            (set.p1_games, set.p2_games)
        }
        Side::P2 => {
            set.p2_games += 1;
            (set.p2_games, set.p1_games)
        }
    };
    // Six games with a two-game lead takes the set; from six-all the next
    // game decides it (7-6).
    if (won >= GAMES_PER_SET && won - lost >= 2) || won == GAMES_PER_SET + 1 {
        score.sets.push(SetScore::default());
    }
}

/// Adjust one side's counter by a signed delta, never dropping below zero.
#[must_use]
pub fn apply_generic(score: GenericScore, side: Side, delta: i64) -> GenericScore {
    let mut next = score;
    let counter = match side {
        Side::P1 => &mut next.p1,
        Side::P2 => &mut next.p2,
    };
    *counter = i64::from(*counter)
        .saturating_add(delta)
        .clamp(0, i64::from(u32::MAX)) as u32;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cricket(state: &ScoreState) -> &CricketScore {
        match state {
            ScoreState::Cricket(score) => score,
            _ => panic!("expected cricket state"),
        }
    }

    fn racket(state: &ScoreState) -> &RacketScore {
        match state {
            ScoreState::Racket(score) => score,
            _ => panic!("expected racket state"),
        }
    }

    #[test]
    fn test_run_adds_runs_and_one_legal_ball() {
        let state = ScoreState::Cricket(CricketScore::default());
        for n in 0..=6 {
            let next = apply(&state, &ScoreEvent::Cricket(CricketEvent::Run(n))).unwrap();
            let score = cricket(&next);
            assert_eq!(score.runs, u32::from(n));
            assert_eq!(score.legal_balls, 1);
            assert_eq!(score.ball_history, vec![BallOutcome::Runs(n)]);
        }
    }

    #[test]
    fn test_run_clamps_at_six() {
        let score = apply_cricket(&CricketScore::default(), CricketEvent::Run(9));
        assert_eq!(score.runs, 6);
        assert_eq!(score.ball_history, vec![BallOutcome::Runs(6)]);
    }

    #[test]
    fn test_wicket_counts_a_legal_ball() {
        let score = apply_cricket(&CricketScore::default(), CricketEvent::Wicket);
        assert_eq!(score.wickets, 1);
        assert_eq!(score.legal_balls, 1);
        assert_eq!(score.runs, 0);
        assert_eq!(score.ball_history, vec![BallOutcome::Wicket]);
    }

    #[test]
    fn test_wickets_clamp_at_ten() {
        let mut score = CricketScore::default();
        for _ in 0..12 {
            score = apply_cricket(&score, CricketEvent::Wicket);
        }
        assert_eq!(score.wickets, 10);
        assert_eq!(score.legal_balls, 12);
    }

    #[test]
    fn test_wide_scores_extras_without_a_legal_ball() {
        let score = apply_cricket(&CricketScore::default(), CricketEvent::Wide { extra: 2 });
        assert_eq!(score.runs, 3);
        assert_eq!(score.legal_balls, 0);
        assert_eq!(score.ball_history, vec![BallOutcome::Wide]);
    }

    #[test]
    fn test_extras_saturate_instead_of_overflowing() {
        let near_max = CricketScore {
            runs: u32::MAX - 1,
            ..CricketScore::default()
        };
        let score = apply_cricket(&near_max, CricketEvent::Wide { extra: u32::MAX });
        assert_eq!(score.runs, u32::MAX);
        assert_eq!(score.legal_balls, 0);

        let score = apply_cricket(&score, CricketEvent::NoBall { extra: u32::MAX });
        assert_eq!(score.runs, u32::MAX);

        let score = apply_cricket(&score, CricketEvent::Run(6));
        assert_eq!(score.runs, u32::MAX);
        assert_eq!(score.legal_balls, 1);
    }

    #[test]
    fn test_no_ball_scores_extras_without_a_legal_ball() {
        let score = apply_cricket(&CricketScore::default(), CricketEvent::NoBall { extra: 0 });
        assert_eq!(score.runs, 1);
        assert_eq!(score.legal_balls, 0);
        assert_eq!(score.ball_history, vec![BallOutcome::NoBall]);
    }

    #[test]
    fn test_input_state_is_not_mutated() {
        let state = ScoreState::Cricket(CricketScore::default());
        let _ = apply(&state, &ScoreEvent::Cricket(CricketEvent::Run(4))).unwrap();
        assert_eq!(cricket(&state).runs, 0);
    }

    fn game_at(p1: PointIndex, p2: PointIndex) -> RacketScore {
        RacketScore {
            current_game: GameScore { p1, p2 },
            ..RacketScore::new("alice".into(), "bob".into())
        }
    }

    #[test]
    fn test_point_steps_the_ladder() {
        let score = apply_racket(&game_at(PointIndex::Love, PointIndex::Love), Side::P1);
        assert_eq!(score.current_game.p1, PointIndex::Fifteen);
        assert_eq!(score.current_game.p2, PointIndex::Love);

        let score = apply_racket(&game_at(PointIndex::Thirty, PointIndex::Fifteen), Side::P1);
        assert_eq!(score.current_game.p1, PointIndex::Forty);
    }

    #[test]
    fn test_forty_over_thirty_wins_the_game() {
        let score = apply_racket(&game_at(PointIndex::Forty, PointIndex::Thirty), Side::P1);
        assert_eq!(score.current_game, GameScore::default());
        assert_eq!(score.active_set().p1_games, 1);
        assert_eq!(score.active_set().p2_games, 0);
    }

    #[test]
    fn test_deuce_goes_to_advantage() {
        let score = apply_racket(&game_at(PointIndex::Forty, PointIndex::Forty), Side::P1);
        assert_eq!(score.current_game.p1, PointIndex::Advantage);
        assert_eq!(score.current_game.p2, PointIndex::Forty);
    }

    #[test]
    fn test_advantage_point_wins_the_game() {
        let score = apply_racket(&game_at(PointIndex::Advantage, PointIndex::Forty), Side::P1);
        assert_eq!(score.current_game, GameScore::default());
        assert_eq!(score.active_set().p1_games, 1);
    }

    #[test]
    fn test_losing_advantage_returns_to_deuce() {
        let score = apply_racket(&game_at(PointIndex::Advantage, PointIndex::Forty), Side::P2);
        assert_eq!(score.current_game.p1, PointIndex::Forty);
        assert_eq!(score.current_game.p2, PointIndex::Forty);
        assert_eq!(score.active_set(), SetScore::default());
    }

    fn win_games(mut score: RacketScore, side: Side, games: u32) -> RacketScore {
        for _ in 0..games {
            // Four straight points take a game from love-all.
            for _ in 0..4 {
                score = apply_racket(&score, side);
            }
        }
        score
    }

    #[test]
    fn test_set_won_at_six_with_two_game_lead() {
        let score = RacketScore::new("alice".into(), "bob".into());
        let score = win_games(score, Side::P2, 4);
        let score = win_games(score, Side::P1, 6);
        assert_eq!(score.sets.len(), 2);
        assert_eq!(score.sets[0], SetScore { p1_games: 6, p2_games: 4 });
        assert_eq!(score.sets[1], SetScore::default());
    }

    #[test]
    fn test_set_not_won_at_six_five() {
        let mut score = RacketScore::new("alice".into(), "bob".into());
        for _ in 0..5 {
            score = win_games(score, Side::P1, 1);
            score = win_games(score, Side::P2, 1);
        }
        score = win_games(score, Side::P1, 1);
        assert_eq!(score.sets.len(), 1);
        assert_eq!(score.active_set(), SetScore { p1_games: 6, p2_games: 5 });
    }

    #[test]
    fn test_deciding_game_at_six_all() {
        let mut score = RacketScore::new("alice".into(), "bob".into());
        for _ in 0..6 {
            score = win_games(score, Side::P1, 1);
            score = win_games(score, Side::P2, 1);
        }
        assert_eq!(score.active_set(), SetScore { p1_games: 6, p2_games: 6 });
        score = win_games(score, Side::P2, 1);
        assert_eq!(score.sets.len(), 2);
        assert_eq!(score.sets[0], SetScore { p1_games: 6, p2_games: 7 });
    }

    #[test]
    fn test_generic_adjust_clamps_at_zero() {
        let score = apply_generic(GenericScore { p1: 2, p2: 0 }, Side::P1, -5);
        assert_eq!(score.p1, 0);
        assert_eq!(score.p2, 0);

        let score = apply_generic(GenericScore::default(), Side::P2, 3);
        assert_eq!(score.p2, 3);
    }

    #[test]
    fn test_sport_mismatch_is_rejected() {
        let state = ScoreState::Cricket(CricketScore::default());
        let err = apply(&state, &ScoreEvent::Racket(RacketEvent::Point(Side::P1))).unwrap_err();
        assert_eq!(err, EngineError::SportMismatch { sport: Sport::Cricket });

        let state = ScoreState::Generic(GenericScore::default());
        let err = apply(&state, &ScoreEvent::Cricket(CricketEvent::Wicket)).unwrap_err();
        assert_eq!(err, EngineError::SportMismatch { sport: Sport::Generic });
    }

    #[test]
    fn test_racket_state_is_not_mutated_by_a_point() {
        let state = ScoreState::Racket(game_at(PointIndex::Forty, PointIndex::Thirty));
        let _ = apply(&state, &ScoreEvent::Racket(RacketEvent::Point(Side::P1))).unwrap();
        assert_eq!(racket(&state).current_game.p1, PointIndex::Forty);
    }
}
