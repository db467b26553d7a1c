//! Customer arrival process tests.
//!
//! Probabilities are forced to 0 or 1 through the config so the
//! stochastic branches become deterministic; a single-product catalog
//! pins the uniform pick.

use shopsim_core::{
    config::{ProductConfig, ShopConfig},
    engine::ShopEngine,
    event::SimEvent,
};

fn single_product_config(starting_stock: u64) -> ShopConfig {
    ShopConfig {
        customer_arrival_chance: 1.0,
        incident_chance: 0.0,
        products: vec![ProductConfig {
            id: "snack".into(),
            name: "Snacks".into(),
            buy_cost: 3.0,
            sell_price: 5.0,
            starting_stock,
        }],
        ..ShopConfig::default()
    }
}

/// Empty shelf: the customer leaves, nothing moves, the log says so.
#[test]
fn out_of_stock_turns_customer_away() {
    let mut engine =
        ShopEngine::build("customer-test".into(), 11, single_product_config(0)).unwrap();

    let events = engine.tick().unwrap();

    assert!(events
        .iter()
        .any(|e| matches!(e, SimEvent::CustomerTurnedAway { .. })));
    assert_eq!(engine.state.ledger.cash(), 50.0);
    assert_eq!(engine.state.ledger.stock_of("snack"), 0);
    assert_eq!(engine.snapshot().recent_log[0], "Customer left: out of stock");
}

/// A purchase of k units moves exactly k*sell_price cash in and k units out.
#[test]
fn purchase_conserves_cash_and_stock() {
    let mut engine =
        ShopEngine::build("customer-test".into(), 11, single_product_config(50)).unwrap();

    let events = engine.tick().unwrap();

    let purchase = events
        .iter()
        .find_map(|e| match e {
            SimEvent::CustomerPurchased { units, revenue, .. } => Some((*units, *revenue)),
            _ => None,
        })
        .expect("arrival chance 1.0 with stock must sell");
    let (units, revenue) = purchase;

    assert!((1..=3).contains(&units));
    assert_eq!(revenue, units as f64 * 5.0);
    assert_eq!(engine.state.ledger.cash(), 50.0 + revenue);
    assert_eq!(engine.state.ledger.stock_of("snack"), 50 - units);
    assert_eq!(engine.state.ledger.daily_sales_of("snack"), units);
    assert_eq!(engine.state.ledger.lifetime_sales_of("snack"), units);
}

/// One unit left but up to three desired: partial fulfillment, never
/// an oversell, never a negative shelf.
#[test]
fn low_stock_fulfills_partially() {
    let mut engine =
        ShopEngine::build("customer-test".into(), 11, single_product_config(1)).unwrap();

    engine.tick().unwrap();

    assert_eq!(engine.state.ledger.stock_of("snack"), 0);
    assert_eq!(engine.state.ledger.lifetime_sales_of("snack"), 1);
    assert_eq!(engine.state.ledger.cash(), 55.0);
}

/// Zero arrival probability: ticks pass, nothing sells.
#[test]
fn no_arrivals_without_the_draw() {
    let config = ShopConfig {
        customer_arrival_chance: 0.0,
        incident_chance: 0.0,
        ..ShopConfig::default()
    };
    let mut engine = ShopEngine::build("customer-test".into(), 11, config).unwrap();

    engine.run_ticks(100).unwrap();

    assert_eq!(engine.state.ledger.cash(), 50.0);
    assert_eq!(engine.state.ledger.lifetime_sales_of("snack"), 0);
    assert!(engine.snapshot().recent_log.is_empty());
}
