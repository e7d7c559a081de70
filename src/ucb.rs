//! UCB1 arm selection.
//!
//! `score_i = wins_i / n_i + sqrt(2 ln t / n_i)` with `t` the total number of
//! contests across all arms (floored at 1). Untried arms get a fixed sentinel
//! that no realistic tried arm can reach, so every arm is played once before
//! the confidence bound starts to matter.

use crate::{argmax_first, total_contests, Decision, DecisionNote, FightRecord, StrategyKind};

/// Score assigned to arms with no recorded contests.
pub const UCB_UNTRIED_SCORE: f64 = 10.0;

/// Per-arm UCB1 scores, index-aligned with `records`.
pub fn ucb1_scores(records: &[FightRecord]) -> Vec<f64> {
    let t = total_contests(records) as f64;
    let log_const = 2.0 * t.ln();
    records
        .iter()
        .map(|r| {
            let n = r.contests();
            if n == 0 {
                UCB_UNTRIED_SCORE
            } else {
                let n = n as f64;
                r.wins as f64 / n + (log_const / n).sqrt()
            }
        })
        .collect()
}

/// Select an arm by UCB1. Deterministic; ties go to the lowest index.
///
/// Returns `None` only if `records` is empty.
pub fn select_ucb1(records: &[FightRecord]) -> Option<Decision> {
    let scores = ucb1_scores(records);
    let chosen = argmax_first(&scores)?;
    let note = if records[chosen].is_untried() {
        DecisionNote::ExploreUntried
    } else {
        DecisionNote::DeterministicChoice
    };
    Some(Decision {
        strategy: StrategyKind::Ucb1,
        chosen,
        scores,
        notes: vec![note],
    })
}
