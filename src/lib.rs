//! `fightmux`: bandit arm selection for repeated win/loss contests.
//!
//! Designed for the "which opponent next?" loop: there is a small, fixed set of
//! arms (contest variants), each contest resolves to a win or a loss, and before
//! every contest you want the arm that maximizes the long-run win rate while
//! still learning how good the others are.
//!
//! A [`FightRecord`] carries the two counters per arm: `wins` and `losses`.
//! Storage is the caller's concern; [`RecordSource`] is the read interface and
//! [`FightLedger`] is an in-memory implementation.
//!
//! **Goals:**
//! - **Pure policies**: strategies read records and return a [`Decision`]; they
//!   never mutate state and never log on their own.
//! - **Injected randomness**: every stochastic path takes an explicit `Rng`, so a
//!   seeded `StdRng` makes selections reproducible.
//! - **Stable tie-breaks**: exact score ties go to the lowest arm index.
//!
//! **Selection policies:**
//! - [`select_ucb1`]: deterministic UCB1 with an untried-arm sentinel.
//! - [`select_gaussian_thompson`]: Thompson sampling with a normal approximation.
//! - [`select_bernoulli_thompson`]: Thompson sampling on the Beta posterior.
//! - [`select_epsilon_greedy`]: greedy with a `1/sqrt(t)` explore rate.
//! - [`StrategyKind`] / [`select_arm`]: dispatch by configuration name.
//! - [`Selector`]: owns a seeded RNG and emits `tracing` diagnostics on request.
//!
//! **Random variates** ([`variate`]): Box–Muller normal, Marsaglia–Tsang Gamma
//! (with an iteration cap), and Beta as a Gamma ratio.
//!
//! **Non-goals:**
//! - No persistence, no contest execution, no result parsing.
//! - Not a general bandit platform: no contextual features, no reward shaping.
//!
//! # Example
//!
//! ```rust
//! use fightmux::{ArenaOutcome, FightLedger, Selector, SelectorConfig, StrategyKind};
//!
//! let mut ledger = FightLedger::new();
//! let cfg = SelectorConfig::default().with_strategy(StrategyKind::BernoulliThompson);
//! let mut selector = Selector::new(cfg);
//!
//! for round in 0..20 {
//!     let d = selector.select_from(&ledger, 3).unwrap();
//!     // ... fight against arm `d.chosen` ...
//!     let outcome = if round % 3 == 0 { ArenaOutcome::Loss } else { ArenaOutcome::Win };
//!     ledger.record(d.chosen, outcome);
//! }
//! ```

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod record;
pub use record::*;

mod roster;
pub use roster::*;

pub mod variate;

mod decision;
pub use decision::*;

mod ucb;
pub use ucb::*;

mod thompson;
pub use thompson::*;

mod epsilon;
pub use epsilon::*;

mod policy;
pub use policy::*;

mod config;
pub use config::*;

mod selector;
pub use selector::*;

/// Index of the first maximum in `scores`.
///
/// Strict `>` in index order, so exact ties go to the lowest index. `NaN`
/// never wins; if every score is `NaN`, arm 0 is returned.
/// `None` only for an empty slice.
pub(crate) fn argmax_first(scores: &[f64]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best = 0usize;
    let mut best_score = f64::NAN;
    for (i, &s) in scores.iter().enumerate() {
        if s.is_nan() {
            continue;
        }
        if best_score.is_nan() || s > best_score {
            best = i;
            best_score = s;
        }
    }
    Some(best)
}
