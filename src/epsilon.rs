//! Epsilon-greedy with a decaying explore rate.
//!
//! With probability `1/sqrt(t)` (t = total contests, floored at 1) a uniformly
//! random arm is played; otherwise the arm with the best observed win rate.
//! Untried arms score [`EPSILON_UNTRIED_SCORE`] in the greedy branch instead of
//! dividing by zero.

use rand::Rng;

use crate::{argmax_first, total_contests, Decision, DecisionNote, FightRecord, StrategyKind};

/// Greedy score for arms with no contests.
pub const EPSILON_UNTRIED_SCORE: f64 = 0.5;

/// Probability of taking the explore branch for these records.
pub fn explore_probability(records: &[FightRecord]) -> f64 {
    1.0 / (total_contests(records) as f64).sqrt()
}

/// Observed win rate per arm (untried arms get [`EPSILON_UNTRIED_SCORE`]).
pub fn greedy_scores(records: &[FightRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.win_rate().unwrap_or(EPSILON_UNTRIED_SCORE))
        .collect()
}

/// Select an arm by decaying epsilon-greedy.
///
/// Returns `None` only if `records` is empty.
pub fn select_epsilon_greedy<R: Rng + ?Sized>(
    records: &[FightRecord],
    rng: &mut R,
) -> Option<Decision> {
    if records.is_empty() {
        return None;
    }
    let probability = explore_probability(records);
    let scores = greedy_scores(records);

    let roll: f64 = rng.random();
    let (chosen, note) = if roll < probability {
        (
            rng.random_range(0..records.len()),
            DecisionNote::EpsilonExplore { probability },
        )
    } else {
        (
            argmax_first(&scores)?,
            DecisionNote::EpsilonExploit { probability },
        )
    };
    Some(Decision {
        strategy: StrategyKind::EpsilonGreedy,
        chosen,
        scores,
        notes: vec![note],
    })
}
