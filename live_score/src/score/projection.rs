//! Display-ready score summaries for organizer and spectator surfaces.
//!
//! Projections are pure and total: absent or mismatched score data falls
//! back to the sport's zero default instead of failing, so a viewer only
//! ever sees stale or zeroed data, never an error.

use super::models::{CricketScore, GenericScore, RacketScore, ScoreState, Sport};

/// Project a score into a one-line display string for the given sport.
///
/// A match that has not been scored yet has no score data; a malformed
/// document may carry the wrong variant. Both cases render the sport's
/// zero default.
#[must_use]
pub fn project(sport: Sport, score: Option<&ScoreState>) -> String {
    match (sport, score) {
        (Sport::Cricket, Some(ScoreState::Cricket(score))) => cricket_summary(score),
        (Sport::Cricket, _) => cricket_summary(&CricketScore::default()),
        (Sport::Racket, Some(ScoreState::Racket(score))) => racket_summary(score),
        (Sport::Racket, _) => racket_summary(&RacketScore::default()),
        (Sport::Generic, Some(ScoreState::Generic(score))) => generic_summary(score),
        (Sport::Generic, _) => generic_summary(&GenericScore::default()),
    }
}

/// `"R/W (o.b overs)"`, e.g. `"2/0 (3.4 overs)"`.
#[must_use]
pub fn cricket_summary(score: &CricketScore) -> String {
    format!(
        "{}/{} ({} overs)",
        score.runs,
        score.wickets,
        score.overs_label()
    )
}

/// Per-set game counts plus the current point labels, e.g. `"6-4 3-2 | 40-AD"`.
#[must_use]
pub fn racket_summary(score: &RacketScore) -> String {
    let sets: Vec<String> = score
        .sets
        .iter()
        .map(|set| format!("{}-{}", set.p1_games, set.p2_games))
        .collect();
    let sets = if sets.is_empty() {
        "0-0".to_string()
    } else {
        sets.join(" ")
    };
    format!(
        "{} | {}-{}",
        sets,
        score.current_game.p1.label(),
        score.current_game.p2.label()
    )
}

/// Raw counters, e.g. `"3 - 1"`.
#[must_use]
pub fn generic_summary(score: &GenericScore) -> String {
    format!("{} - {}", score.p1, score.p2)
}
