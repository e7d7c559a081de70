//! Strategy names and dispatch.
//!
//! The four policies are plain functions with the same contract: read all
//! records, return one arm index (wrapped in a [`Decision`]). [`StrategyKind`]
//! is the tag callers configure; [`StrategyKind::policy`] maps it to the
//! function value, and [`select_arm`] is the one-call entry point.
//!
//! Unknown names are a configuration error. There is no fallback strategy.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::{
    select_bernoulli_thompson, select_epsilon_greedy, select_gaussian_thompson, select_ucb1,
    Decision, FightRecord, SelectError,
};

/// A selection policy as a function value.
pub type PolicyFn = fn(&[FightRecord], &mut dyn RngCore) -> Option<Decision>;

/// Which selection policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "UCB"))]
    Ucb1,
    #[cfg_attr(feature = "serde", serde(rename = "bernoulliThompson"))]
    BernoulliThompson,
    #[cfg_attr(feature = "serde", serde(rename = "gaussianThompson"))]
    GaussianThompson,
    #[cfg_attr(feature = "serde", serde(rename = "epsilonGreedy"))]
    EpsilonGreedy,
}

impl StrategyKind {
    /// Every strategy, in a stable order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Ucb1,
        StrategyKind::BernoulliThompson,
        StrategyKind::GaussianThompson,
        StrategyKind::EpsilonGreedy,
    ];

    /// Configuration name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Ucb1 => "UCB",
            StrategyKind::BernoulliThompson => "bernoulliThompson",
            StrategyKind::GaussianThompson => "gaussianThompson",
            StrategyKind::EpsilonGreedy => "epsilonGreedy",
        }
    }

    /// Whether the policy consumes randomness.
    pub fn is_stochastic(self) -> bool {
        !matches!(self, StrategyKind::Ucb1)
    }

    /// The policy function for this strategy.
    pub fn policy(self) -> PolicyFn {
        match self {
            StrategyKind::Ucb1 => run_ucb1,
            StrategyKind::BernoulliThompson => run_bernoulli_thompson,
            StrategyKind::GaussianThompson => run_gaussian_thompson,
            StrategyKind::EpsilonGreedy => run_epsilon_greedy,
        }
    }

    /// Run this strategy over `records`.
    pub fn decide<R: RngCore>(
        self,
        records: &[FightRecord],
        rng: &mut R,
    ) -> Result<Decision, SelectError> {
        (self.policy())(records, rng).ok_or(SelectError::NoArms)
    }
}

fn run_ucb1(records: &[FightRecord], _rng: &mut dyn RngCore) -> Option<Decision> {
    select_ucb1(records)
}

fn run_bernoulli_thompson(records: &[FightRecord], rng: &mut dyn RngCore) -> Option<Decision> {
    select_bernoulli_thompson(records, rng)
}

fn run_gaussian_thompson(records: &[FightRecord], rng: &mut dyn RngCore) -> Option<Decision> {
    select_gaussian_thompson(records, rng)
}

fn run_epsilon_greedy(records: &[FightRecord], rng: &mut dyn RngCore) -> Option<Decision> {
    select_epsilon_greedy(records, rng)
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| SelectError::UnknownStrategy(s.to_string()))
    }
}

/// Pick the next arm with the strategy named `strategy_name`.
///
/// # Example
///
/// ```rust
/// use fightmux::{select_arm, FightRecord};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let records = [FightRecord::new(9, 1), FightRecord::new(0, 0)];
/// let mut rng = StdRng::seed_from_u64(0);
/// // UCB1 plays the untried arm first.
/// assert_eq!(select_arm("UCB", &records, &mut rng).unwrap(), 1);
/// assert!(select_arm("softmax", &records, &mut rng).is_err());
/// ```
pub fn select_arm<R: RngCore>(
    strategy_name: &str,
    records: &[FightRecord],
    rng: &mut R,
) -> Result<usize, SelectError> {
    let kind: StrategyKind = strategy_name.parse()?;
    kind.decide(records, rng).map(|d| d.chosen)
}
