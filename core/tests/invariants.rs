//! Long-run invariants: cash and every stock count stay non-negative in
//! all reachable states, and daily counters never exceed lifetime ones.

use shopsim_core::{config::ShopConfig, engine::ShopEngine};

#[test]
fn economy_invariants_hold_over_long_runs() {
    for seed in [1u64, 42, 99, 12345] {
        let mut engine = ShopEngine::build(format!("inv-{seed}"), seed, ShopConfig::default())
            .expect("engine builds");
        let mut next_option = 0usize;

        for _ in 0..3000 {
            if engine.state.incident.is_some() {
                engine.resolve_incident(next_option);
                next_option = (next_option + 1) % 2;
            }
            // Occasional restocks keep the economy moving both ways.
            if engine.clock.elapsed_minutes % 97 == 0 {
                engine.buy_stock("snack", 4);
            }
            engine.tick().expect("tick");

            let snapshot = engine.snapshot();
            assert!(snapshot.cash >= 0.0, "seed {seed}: cash went negative");
            for row in &snapshot.products {
                assert!(
                    row.sold_today <= row.sold_lifetime,
                    "seed {seed}: daily sales exceed lifetime for {}",
                    row.id
                );
            }
        }
    }
}

#[test]
fn activity_log_stays_bounded() {
    let config = ShopConfig {
        customer_arrival_chance: 1.0,
        incident_chance: 0.0,
        ..ShopConfig::default()
    };
    let mut engine = ShopEngine::build("inv-log".into(), 7, config).unwrap();

    engine.run_ticks(200).unwrap();

    assert_eq!(engine.snapshot().recent_log.len(), 6);
}
