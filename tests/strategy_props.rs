//! Property tests for the selection strategies.
//!
//! 1. **Range**: every strategy returns an index in `[0, N)` for non-empty input.
//! 2. **UCB1 determinism**: same records, same choice.
//! 3. **Untried priority**: if any arm is untried, UCB1 picks an untried arm.
//! 4. **Greedy monotonicity**: equal contest counts, more wins -> higher score.
//! 5. **Tie stability**: identical records resolve to the lowest index.

use fightmux::{
    greedy_scores, select_arm, select_epsilon_greedy, select_ucb1, ucb1_scores, DecisionNote,
    FightRecord, SelectError, StrategyKind,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_record() -> impl Strategy<Value = FightRecord> {
    (0u64..1_000_000, 0u64..1_000_000).prop_map(|(w, l)| FightRecord::new(w, l))
}

fn arb_records() -> impl Strategy<Value = Vec<FightRecord>> {
    prop::collection::vec(arb_record(), 1..12)
}

// ---------------------------------------------------------------------------
// 1. Range
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_strategy_returns_an_arm_in_range(
        records in prop::collection::vec(
            prop_oneof![Just(FightRecord::default()), arb_record()],
            1..12,
        ),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for k in StrategyKind::ALL {
            let i = select_arm(k.name(), &records, &mut rng).unwrap();
            prop_assert!(i < records.len(), "{k}: {i} out of range");
        }
    }

    // -----------------------------------------------------------------------
    // 2. UCB1 determinism
    // -----------------------------------------------------------------------

    #[test]
    fn ucb1_is_deterministic(records in arb_records()) {
        let a = select_ucb1(&records).unwrap();
        let b = select_ucb1(&records).unwrap();
        prop_assert_eq!(a, b);
    }

    // -----------------------------------------------------------------------
    // 3. Untried priority
    // -----------------------------------------------------------------------

    #[test]
    fn ucb1_plays_untried_arms_first(
        records in arb_records(),
        untried_at in any::<prop::sample::Index>(),
    ) {
        let mut records = records;
        let i = untried_at.index(records.len());
        records[i] = FightRecord::default();
        let d = select_ucb1(&records).unwrap();
        prop_assert!(records[d.chosen].is_untried());
        prop_assert_eq!(d.notes, vec![DecisionNote::ExploreUntried]);
        // And it is the first untried arm.
        let first = records.iter().position(|r| r.is_untried()).unwrap();
        prop_assert_eq!(d.chosen, first);
    }

    // -----------------------------------------------------------------------
    // 4. Greedy monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn greedy_prefers_more_wins_at_equal_counts(
        n in 2u64..100_000,
        a in 0u64..100_000,
        b in 0u64..100_000,
        seed in any::<u64>(),
    ) {
        let (hi, lo) = (a.max(b) % n, a.min(b) % n);
        prop_assume!(hi > lo);
        let records = [
            FightRecord::new(lo, n - lo),
            FightRecord::new(hi, n - hi),
        ];
        let s = greedy_scores(&records);
        prop_assert!(s[1] > s[0]);

        let mut rng = StdRng::seed_from_u64(seed);
        let d = select_epsilon_greedy(&records, &mut rng).unwrap();
        if !d.explored() {
            prop_assert_eq!(d.chosen, 1);
        }
    }

    // -----------------------------------------------------------------------
    // 5. Tie stability
    // -----------------------------------------------------------------------

    #[test]
    fn identical_records_pick_lowest_index(
        r in arb_record().prop_filter("tried", |r| !r.is_untried()),
        k in 2usize..8,
        lead in 0usize..4,
    ) {
        // `lead` strictly worse arms in front, then k identical copies of `r`.
        let worse = FightRecord::new(0, r.contests().max(1) * 1_000_000);
        let mut records = vec![worse; lead];
        records.extend(std::iter::repeat(r).take(k));
        let s = ucb1_scores(&records);
        prop_assert_eq!(s[lead].to_bits(), s[lead + k - 1].to_bits());
        let d = select_ucb1(&records).unwrap();
        prop_assert!(d.chosen <= lead);
        if s[lead] > s[0] || lead == 0 {
            prop_assert_eq!(d.chosen, lead);
        }
    }

    #[test]
    fn negative_counts_are_rejected(
        wins in -1_000i64..1_000,
        losses in -1_000i64..1_000,
    ) {
        let r = FightRecord::from_signed(3, wins, losses);
        if wins < 0 || losses < 0 {
            prop_assert_eq!(r, Err(SelectError::InvalidRecord { arm: 3, wins, losses }));
        } else {
            prop_assert_eq!(r, Ok(FightRecord::new(wins as u64, losses as u64)));
        }
    }
}

#[test]
fn policies_do_not_mutate_records() {
    let records = vec![
        FightRecord::new(7, 7),
        FightRecord::new(0, 0),
        FightRecord::new(12, 2),
    ];
    let before = records.clone();
    let mut rng = StdRng::seed_from_u64(0);
    for k in StrategyKind::ALL {
        for _ in 0..20 {
            k.decide(&records, &mut rng).unwrap();
        }
    }
    assert_eq!(records, before);
}

#[test]
fn policy_fn_values_are_interchangeable() {
    let records = [FightRecord::new(3, 9), FightRecord::new(9, 3)];
    let mut rng = StdRng::seed_from_u64(17);
    let policies: Vec<_> = StrategyKind::ALL.iter().map(|k| k.policy()).collect();
    for p in policies {
        let d = p(&records, &mut rng).unwrap();
        assert!(d.chosen < 2);
    }
}
