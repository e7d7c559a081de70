//! Decision envelope for policy outputs.
//!
//! Every strategy returns the chosen arm together with the per-arm scores it
//! compared and a short list of typed notes. That is enough to log a decision,
//! replay it in a test, or print a per-arm diagnostic table without the policy
//! doing any I/O itself.

use crate::{ArmRoster, StrategyKind};

/// Audit notes attached to a decision.
///
/// Notes are small and typed. Prefer adding new variants over changing the
/// meaning of existing ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionNote {
    /// The chosen arm had never been played (UCB1 untried sentinel won).
    ExploreUntried,

    /// Argmax over deterministic scores, first maximum in index order.
    DeterministicChoice,

    /// One posterior sample per arm, chosen by argmax.
    SampledPosteriorMax,

    /// Arms with no contests that were scored from the tight untried prior.
    UntriedPrior { arms: Vec<usize> },

    /// Arms with exactly one zero count whose Beta parameter was floored to 1.
    ZeroCountFloored { arms: Vec<usize> },

    /// Epsilon-greedy took the uniform-random branch.
    EpsilonExplore { probability: f64 },

    /// Epsilon-greedy took the argmax branch.
    EpsilonExploit { probability: f64 },
}

/// A single policy decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// The policy that produced this decision.
    pub strategy: StrategyKind,
    /// Chosen arm index, in `[0, scores.len())`.
    pub chosen: usize,
    /// Per-arm score the policy compared (index-aligned with the records).
    pub scores: Vec<f64>,
    /// Audit notes describing why this choice happened.
    pub notes: Vec<DecisionNote>,
}

impl Decision {
    /// Score of the chosen arm.
    pub fn chosen_score(&self) -> f64 {
        self.scores.get(self.chosen).copied().unwrap_or(f64::NAN)
    }

    /// Whether epsilon-greedy explored for this decision.
    pub fn explored(&self) -> bool {
        self.notes
            .iter()
            .any(|n| matches!(n, DecisionNote::EpsilonExplore { .. }))
    }

    /// Emit one `debug` event per arm plus a summary event.
    ///
    /// Pure side channel: nothing here feeds back into selection.
    pub fn log_scores(&self, roster: &ArmRoster) {
        for (i, &score) in self.scores.iter().enumerate() {
            tracing::debug!(
                strategy = %self.strategy,
                arm = i,
                name = %roster.label(i),
                score,
                chosen = (i == self.chosen),
                "arm score"
            );
        }
        tracing::debug!(
            strategy = %self.strategy,
            chosen = self.chosen,
            name = %roster.label(self.chosen),
            notes = ?self.notes,
            "arm selected"
        );
    }
}
