//! Day-boundary tests: daily sales reset exactly once per crossing,
//! before that tick's stochastic processes run.

use shopsim_core::{config::ShopConfig, engine::ShopEngine, event::SimEvent};

fn quiet_config() -> ShopConfig {
    // No arrivals, no incidents: the clock is the only moving part.
    ShopConfig {
        customer_arrival_chance: 0.0,
        incident_chance: 0.0,
        ..ShopConfig::default()
    }
}

/// With the default 08:00 start offset, minute 960 is the first midnight:
/// elapsed 959 + offset 480 = 1439 (day 1), 960 + 480 = 1440 (day 2).
#[test]
fn daily_sales_reset_fires_exactly_at_midnight() {
    let mut engine = ShopEngine::build("rollover-test".into(), 3, quiet_config()).unwrap();

    // Seed a day-1 sale directly. Tests may reach into state;
    // production code goes through the engine API.
    engine.state.ledger.record_sale("snack", 2, 5.0);

    engine.run_ticks(959).unwrap();
    assert_eq!(engine.clock.elapsed_minutes, 959);
    assert_eq!(engine.state.ledger.daily_sales_of("snack"), 2);

    let events = engine.tick().unwrap();
    assert_eq!(engine.clock.elapsed_minutes, 960);
    assert!(events
        .iter()
        .any(|e| matches!(e, SimEvent::DayRolledOver { day: 2, .. })));
    assert_eq!(engine.state.ledger.daily_sales_of("snack"), 0);
    assert_eq!(engine.state.ledger.lifetime_sales_of("snack"), 2);
}

/// No second reset until the next midnight, 1440 minutes later.
#[test]
fn rollover_fires_once_per_day() {
    let mut engine = ShopEngine::build("rollover-test".into(), 3, quiet_config()).unwrap();

    let events = engine.run_ticks(960 + 1439).unwrap();
    let rollovers = events
        .iter()
        .filter(|e| matches!(e, SimEvent::DayRolledOver { .. }))
        .count();
    assert_eq!(rollovers, 1);
    assert_eq!(engine.clock.day(), 2);

    let events = engine.tick().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, SimEvent::DayRolledOver { day: 3, .. })));
}
