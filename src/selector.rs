//! Seedable selector that owns its random source.
//!
//! Notes:
//! - Default construction uses a fixed seed (deterministic by default).
//! - The selector never touches the records; reporting outcomes back into the
//!   store is the caller's job, one increment per contest.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{ArmRoster, Decision, FightRecord, RecordSource, SelectError, SelectorConfig};

/// Runs the configured strategy with an internal seeded RNG.
#[derive(Debug, Clone)]
pub struct Selector {
    cfg: SelectorConfig,
    rng: StdRng,
}

impl Selector {
    /// Create a selector seeded from `cfg.seed`.
    pub fn new(cfg: SelectorConfig) -> Self {
        Self::with_seed(cfg, cfg.seed)
    }

    /// Create a selector with an explicit seed (overrides `cfg.seed`).
    pub fn with_seed(mut cfg: SelectorConfig, seed: u64) -> Self {
        cfg.seed = seed;
        Self {
            cfg,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.cfg
    }

    /// Choose the next arm for `records`.
    pub fn select(&mut self, records: &[FightRecord]) -> Result<Decision, SelectError> {
        self.select_labeled(records, &ArmRoster::default())
    }

    /// Like [`select`](Self::select), but diagnostics use the roster's labels.
    pub fn select_labeled(
        &mut self,
        records: &[FightRecord],
        roster: &ArmRoster,
    ) -> Result<Decision, SelectError> {
        let d = self.cfg.strategy.decide(records, &mut self.rng)?;
        if self.cfg.debug {
            d.log_scores(roster);
        }
        Ok(d)
    }

    /// Fetch `arm_count` records from `source`, then select.
    pub fn select_from<S: RecordSource + ?Sized>(
        &mut self,
        source: &S,
        arm_count: usize,
    ) -> Result<Decision, SelectError> {
        let records = source.fight_records(arm_count);
        self.select(&records)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}
