//! Selector configuration.

use crate::{SelectError, StrategyKind};

/// Configuration for a [`Selector`](crate::Selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Policy to run on every selection.
    pub strategy: StrategyKind,
    /// Seed for the internal RNG (deterministic by default).
    pub seed: u64,
    /// Emit per-arm score diagnostics at `debug` level.
    pub debug: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Ucb1,
            seed: 0,
            debug: false,
        }
    }
}

impl SelectorConfig {
    /// Config for a strategy given by its configuration name.
    pub fn for_strategy_name(name: &str) -> Result<Self, SelectError> {
        Ok(Self {
            strategy: name.parse()?,
            ..Self::default()
        })
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
