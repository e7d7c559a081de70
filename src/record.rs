//! Per-arm win/loss counters and the read interface policies consume.
//!
//! Persistence is the caller's business. [`FightLedger`] is an in-memory store
//! that follows the same conventions a persisted one would: counters only ever
//! increment by one per contest, and an epoch reset reseeds every arm.

use std::collections::BTreeMap;

use crate::SelectError;

/// Wins and losses seeded into every arm when a new scoring epoch begins.
pub const EPOCH_SEED: u64 = 7;

/// Cumulative win/loss counts for one arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightRecord {
    pub wins: u64,
    pub losses: u64,
}

impl FightRecord {
    pub const fn new(wins: u64, losses: u64) -> Self {
        Self { wins, losses }
    }

    /// Build a record from externally stored signed counters.
    ///
    /// Negative counts are rejected rather than clamped.
    pub fn from_signed(arm: usize, wins: i64, losses: i64) -> Result<Self, SelectError> {
        match (u64::try_from(wins), u64::try_from(losses)) {
            (Ok(w), Ok(l)) => Ok(Self::new(w, l)),
            _ => Err(SelectError::InvalidRecord { arm, wins, losses }),
        }
    }

    /// Total resolved contests (`wins + losses`).
    pub fn contests(&self) -> u64 {
        self.wins.saturating_add(self.losses)
    }

    pub fn is_untried(&self) -> bool {
        self.contests() == 0
    }

    /// Observed win rate, or `None` for an untried arm.
    pub fn win_rate(&self) -> Option<f64> {
        let n = self.contests();
        if n == 0 {
            None
        } else {
            Some(self.wins as f64 / n as f64)
        }
    }
}

/// Total contests across all arms, floored at 1.
///
/// Both UCB1 (`ln t`) and epsilon-greedy (`1/sqrt(t)`) need `t >= 1`.
pub fn total_contests(records: &[FightRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.contests()))
        .max(1)
}

/// Resolved result of a single contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArenaOutcome {
    Win,
    Loss,
    /// Ties are observed but never counted.
    Tie,
}

/// Read side of a fight-record store.
///
/// Implementations return exactly `arm_count` records in arm-index order,
/// defaulting absent arms to `(0, 0)`.
pub trait RecordSource {
    fn fight_records(&self, arm_count: usize) -> Vec<FightRecord>;
}

impl RecordSource for [FightRecord] {
    fn fight_records(&self, arm_count: usize) -> Vec<FightRecord> {
        (0..arm_count)
            .map(|i| self.get(i).copied().unwrap_or_default())
            .collect()
    }
}

impl RecordSource for Vec<FightRecord> {
    fn fight_records(&self, arm_count: usize) -> Vec<FightRecord> {
        self.as_slice().fight_records(arm_count)
    }
}

/// In-memory fight-record store keyed by arm index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightLedger {
    records: BTreeMap<usize, FightRecord>,
}

impl FightLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for `arm` (`(0, 0)` if never touched).
    pub fn get(&self, arm: usize) -> FightRecord {
        self.records.get(&arm).copied().unwrap_or_default()
    }

    pub fn record_win(&mut self, arm: usize) {
        let r = self.records.entry(arm).or_default();
        r.wins = r.wins.saturating_add(1);
    }

    pub fn record_loss(&mut self, arm: usize) {
        let r = self.records.entry(arm).or_default();
        r.losses = r.losses.saturating_add(1);
    }

    /// Apply one contest result. Ties leave the counters untouched.
    pub fn record(&mut self, arm: usize, outcome: ArenaOutcome) {
        match outcome {
            ArenaOutcome::Win => self.record_win(arm),
            ArenaOutcome::Loss => self.record_loss(arm),
            ArenaOutcome::Tie => {}
        }
    }

    /// Start a new scoring epoch: every arm in `0..arm_count` gets `(seed, seed)`,
    /// and arms outside that range are dropped.
    pub fn reset_epoch(&mut self, arm_count: usize, seed: u64) {
        self.records = (0..arm_count)
            .map(|i| (i, FightRecord::new(seed, seed)))
            .collect();
    }

    /// Drop all counters.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl RecordSource for FightLedger {
    fn fight_records(&self, arm_count: usize) -> Vec<FightRecord> {
        (0..arm_count).map(|i| self.get(i)).collect()
    }
}
