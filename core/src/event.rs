//! The event bus — everything that happened during a tick or command.
//!
//! RULE: subsystems report outcomes only as SimEvents. The engine turns
//! the player-visible subset into activity-log lines via log_line();
//! bookkeeping variants (tick markers, day rollover) stay off the log.

use crate::types::{ProductId, Tick};
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
/// Variants are added over time — never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    TickStarted {
        tick: Tick,
    },
    TickCompleted {
        tick: Tick,
    },
    DayRolledOver {
        tick: Tick,
        day: u64,
    },

    // ── Customer events ────────────────────────────
    CustomerPurchased {
        tick: Tick,
        product_id: ProductId,
        product_name: String,
        units: u64,
        revenue: f64,
    },
    CustomerTurnedAway {
        tick: Tick,
        product_id: ProductId,
    },

    // ── Restock events ─────────────────────────────
    StockPurchased {
        tick: Tick,
        product_id: ProductId,
        product_name: String,
        units: u64,
        cost: f64,
    },
    RestockRejected {
        tick: Tick,
        product_id: ProductId,
    },

    // ── Incident events ────────────────────────────
    IncidentTriggered {
        tick: Tick,
        title: String,
    },
    IncidentResolved {
        tick: Tick,
        label: String,
    },
}

impl SimEvent {
    /// The activity-log line for this event, if the player should see one.
    pub fn log_line(&self) -> Option<String> {
        match self {
            Self::CustomerPurchased {
                units,
                product_name,
                revenue,
                ..
            } => Some(format!(
                "Customer bought {units} {product_name} (+${})",
                money(*revenue)
            )),
            Self::CustomerTurnedAway { .. } => Some("Customer left: out of stock".to_string()),
            Self::StockPurchased {
                units,
                product_name,
                cost,
                ..
            } => Some(format!(
                "Restocked {units} {product_name} (-${})",
                money(*cost)
            )),
            Self::RestockRejected { .. } => Some("Not enough cash to restock".to_string()),
            Self::IncidentTriggered { title, .. } => Some(format!("Incident: {title}")),
            Self::IncidentResolved { label, .. } => Some(format!("Resolved: {label}")),
            Self::TickStarted { .. } | Self::TickCompleted { .. } | Self::DayRolledOver { .. } => {
                None
            }
        }
    }
}

/// Whole dollars print bare, anything else keeps cents.
fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
