//! Pause semantics: player pause and incident pause are independent
//! flags, and the effective pause is their OR.

use shopsim_core::{config::ShopConfig, engine::ShopEngine};

#[test]
fn player_pause_gates_the_clock() {
    let mut engine = ShopEngine::build("pause-test".into(), 9, ShopConfig::default()).unwrap();

    engine.toggle_player_pause();
    assert!(engine.paused());
    for _ in 0..5 {
        assert!(engine.tick().unwrap().is_empty());
    }
    assert_eq!(engine.clock.elapsed_minutes, 0);

    engine.toggle_player_pause();
    assert!(!engine.paused());
    engine.tick().unwrap();
    assert_eq!(engine.clock.elapsed_minutes, 1);
}

/// Resolving an incident drops only the incident half of the pause;
/// an explicit player pause survives it.
#[test]
fn player_pause_survives_incident_resolution() {
    let config = ShopConfig {
        customer_arrival_chance: 0.0,
        incident_chance: 1.0,
        ..ShopConfig::default()
    };
    let mut engine = ShopEngine::build("pause-test".into(), 9, config).unwrap();

    engine.tick().unwrap();
    assert!(engine.state.pause.by_incident());

    engine.toggle_player_pause();
    engine.resolve_incident(0);

    assert!(!engine.state.pause.by_incident());
    assert!(engine.state.pause.by_player);
    assert!(engine.paused());
    assert!(engine.tick().unwrap().is_empty());
}
