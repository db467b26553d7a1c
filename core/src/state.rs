//! Shared world state: catalog, ledger, pause flags, the active incident,
//! and the player-visible activity log.
//!
//! RULE: subsystems mutate the world only through the `&mut ShopState`
//! handed to their update() call or through the engine's command handlers.
//! Both run on the single engine execution context, so every mutation is
//! atomic with respect to a tick.

use crate::{
    catalog::Catalog,
    config::ShopConfig,
    incident_subsystem::ActiveIncident,
    ledger::Ledger,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many recent activity lines the UI sees.
pub const ACTIVITY_LOG_CAP: usize = 6;

/// Player pause and incident pause are independent flags; the clock is
/// gated on their OR. Only the incident subsystem may touch by_incident.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PauseState {
    pub by_player: bool,
    by_incident: bool,
}

impl PauseState {
    pub fn effective(&self) -> bool {
        self.by_player || self.by_incident
    }

    pub fn by_incident(&self) -> bool {
        self.by_incident
    }

    pub fn toggle_player(&mut self) {
        self.by_player = !self.by_player;
    }

    pub(crate) fn set_incident(&mut self, paused: bool) {
        self.by_incident = paused;
    }
}

/// Bounded most-recent-first history of human-readable tick outcomes.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn push(&mut self, line: String) {
        self.entries.push_front(line);
        self.entries.truncate(ACTIVITY_LOG_CAP);
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[derive(Debug)]
pub struct ShopState {
    pub catalog: Catalog,
    pub ledger: Ledger,
    pub pause: PauseState,
    pub incident: Option<ActiveIncident>,
    pub activity: ActivityLog,
}

impl ShopState {
    pub fn from_config(config: &ShopConfig) -> Self {
        let catalog = Catalog::from_config(&config.products);
        let ledger = Ledger::new(
            config.starting_cash,
            config
                .products
                .iter()
                .map(|p| (p.id.clone(), p.starting_stock)),
        );
        Self {
            catalog,
            ledger,
            pause: PauseState::default(),
            incident: None,
            activity: ActivityLog::default(),
        }
    }
}
