//! Error type for arm selection.

use thiserror::Error;

/// Errors surfaced by strategy dispatch and record validation.
///
/// Numerically degenerate samples (NaN scores) are not errors: they flow
/// through as non-finite values and simply never win an argmax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The configured strategy name does not map to a known policy.
    #[error("unknown strategy {0:?} (expected one of: UCB, bernoulliThompson, gaussianThompson, epsilonGreedy)")]
    UnknownStrategy(String),

    /// A record arrived with a negative win or loss count.
    #[error("invalid fight record for arm {arm}: wins={wins}, losses={losses} (counts must be >= 0)")]
    InvalidRecord { arm: usize, wins: i64, losses: i64 },

    /// Selection was requested over an empty arm set.
    #[error("no arms to select from")]
    NoArms,
}
