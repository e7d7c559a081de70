//! Simulated arena: pick an opponent, fight, record the result, repeat.
//!
//! Usage: `cargo run --example arena_sim -- [strategy] [rounds]`
//! (`RUST_LOG=fightmux=debug` to see per-arm scores).

use fightmux::{
    ArenaOutcome, ArmRoster, FightLedger, RecordSource, Selector, SelectorConfig, EPOCH_SEED,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let strategy = args.next().unwrap_or_else(|| "bernoulliThompson".to_string());
    let rounds: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(2_000);

    let cfg = match SelectorConfig::for_strategy_name(&strategy) {
        Ok(cfg) => cfg.with_debug(true),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let roster = ArmRoster::from_names([
        "Goblin Camp",
        "Troll Bridge",
        "Dragon Lair",
        "Bandit Road",
    ]);
    // Simulated true win probabilities (unknown to the selector).
    let true_p = [0.62, 0.48, 0.20, 0.71];
    let mut ledger = FightLedger::new();
    ledger.reset_epoch(roster.len(), EPOCH_SEED);

    let mut selector = Selector::new(cfg);
    let mut env = StdRng::seed_from_u64(123);
    let mut wins = 0usize;

    for t in 0..rounds {
        let records = ledger.fight_records(roster.len());
        let d = match selector.select_labeled(&records, &roster) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };
        // Small chance of a draw, which is not counted.
        let roll: f64 = env.random();
        let outcome = if roll < 0.02 {
            ArenaOutcome::Tie
        } else if env.random::<f64>() < true_p[d.chosen] {
            ArenaOutcome::Win
        } else {
            ArenaOutcome::Loss
        };
        if outcome == ArenaOutcome::Win {
            wins += 1;
        }
        ledger.record(d.chosen, outcome);

        if t % 250 == 0 {
            eprintln!("t={t:5} chose={:<13} outcome={outcome:?}", roster.label(d.chosen));
        }
    }

    let win_rate = wins as f64 / rounds.max(1) as f64;
    println!("strategy={strategy} rounds={rounds} win_rate={win_rate:.3}");
    for (i, r) in ledger.fight_records(roster.len()).iter().enumerate() {
        println!(
            "{:<13} wins={:5} losses={:5} rate={:.3}",
            roster.label(i),
            r.wins,
            r.losses,
            r.win_rate().unwrap_or(0.0)
        );
    }
}
