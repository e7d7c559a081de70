//! Thompson sampling over win/loss counts.
//!
//! Two flavours share the same shape: draw one plausible win rate per arm,
//! then take the argmax.
//!
//! - **Gaussian**: `Normal(wins/n, 1/sqrt(n))`, with a tight `Normal(0.5, 0.01)`
//!   prior for arms that have never been played.
//! - **Bernoulli**: `Beta(wins, losses)`.
//!
//! Notes:
//! - `Beta(0, x)` is undefined, so the Bernoulli flavour hardens zero counts:
//!   a `(0, 0)` arm is scored from the same untried prior as the Gaussian
//!   flavour, and a single zero count is floored to 1 before the Beta draw.
//!   Both cases are recorded in the decision notes.
//! - Selection is random by design. Pass a seeded RNG for reproducibility.

use rand::Rng;

use crate::variate::{sample_beta, sample_normal};
use crate::{argmax_first, Decision, DecisionNote, FightRecord, StrategyKind};

/// Mean of the prior used for arms with no contests.
pub const UNTRIED_PRIOR_MEAN: f64 = 0.5;
/// Standard deviation of the prior used for arms with no contests.
pub const UNTRIED_PRIOR_STDEV: f64 = 0.01;

/// Gaussian Thompson sampling.
///
/// Returns `None` only if `records` is empty.
pub fn select_gaussian_thompson<R: Rng + ?Sized>(
    records: &[FightRecord],
    rng: &mut R,
) -> Option<Decision> {
    let mut untried = Vec::new();
    let mut scores = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        let s = match r.win_rate() {
            Some(mean) => sample_normal(rng, mean, 1.0 / (r.contests() as f64).sqrt()),
            None => {
                untried.push(i);
                sample_normal(rng, UNTRIED_PRIOR_MEAN, UNTRIED_PRIOR_STDEV)
            }
        };
        scores.push(s);
    }
    let chosen = argmax_first(&scores)?;

    let mut notes = vec![DecisionNote::SampledPosteriorMax];
    if !untried.is_empty() {
        notes.push(DecisionNote::UntriedPrior { arms: untried });
    }
    Some(Decision {
        strategy: StrategyKind::GaussianThompson,
        chosen,
        scores,
        notes,
    })
}

/// Bernoulli (Beta-posterior) Thompson sampling.
///
/// Returns `None` only if `records` is empty.
pub fn select_bernoulli_thompson<R: Rng + ?Sized>(
    records: &[FightRecord],
    rng: &mut R,
) -> Option<Decision> {
    let mut untried = Vec::new();
    let mut floored = Vec::new();
    let mut scores = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        let s = match (r.wins, r.losses) {
            (0, 0) => {
                untried.push(i);
                sample_normal(rng, UNTRIED_PRIOR_MEAN, UNTRIED_PRIOR_STDEV)
            }
            (w, l) => {
                if w == 0 || l == 0 {
                    floored.push(i);
                }
                sample_beta(rng, w.max(1) as f64, l.max(1) as f64)
            }
        };
        scores.push(s);
    }
    let chosen = argmax_first(&scores)?;

    let mut notes = vec![DecisionNote::SampledPosteriorMax];
    if !untried.is_empty() {
        notes.push(DecisionNote::UntriedPrior { arms: untried });
    }
    if !floored.is_empty() {
        notes.push(DecisionNote::ZeroCountFloored { arms: floored });
    }
    Some(Decision {
        strategy: StrategyKind::BernoulliThompson,
        chosen,
        scores,
        notes,
    })
}
