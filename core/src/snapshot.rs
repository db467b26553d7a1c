//! Read-only state snapshots for the UI.
//!
//! The engine mutates its internal model and publishes one of these after
//! each tick or command. The UI never touches live state, and incident
//! options are exposed as label/note pairs only — effects stay inside
//! the core.

use crate::{clock::ShopClock, state::ShopState, types::{ProductId, RunId, Tick}};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub buy_cost: f64,
    pub sell_price: f64,
    pub stock: u64,
    pub unit_profit: f64,
    pub margin: f64,
    pub sold_today: u64,
    pub sold_lifetime: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentOptionView {
    pub label: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentView {
    pub title: String,
    pub body: String,
    pub options: Vec<IncidentOptionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSnapshot {
    pub run_id: RunId,
    pub tick: Tick,
    pub day: u64,
    pub time_label: String,
    pub cash: f64,
    pub paused_by_player: bool,
    pub paused_by_incident: bool,
    pub paused: bool,
    pub products: Vec<ProductRow>,
    pub incident: Option<IncidentView>,
    pub recent_log: Vec<String>,
}

impl ShopSnapshot {
    pub fn capture(run_id: &RunId, clock: &ShopClock, state: &ShopState) -> Self {
        let products = state
            .catalog
            .iter()
            .map(|p| {
                let unit_profit = p.sell_price - p.buy_cost;
                ProductRow {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    buy_cost: p.buy_cost,
                    sell_price: p.sell_price,
                    stock: state.ledger.stock_of(&p.id),
                    unit_profit,
                    margin: if p.sell_price > 0.0 {
                        unit_profit / p.sell_price
                    } else {
                        0.0
                    },
                    sold_today: state.ledger.daily_sales_of(&p.id),
                    sold_lifetime: state.ledger.lifetime_sales_of(&p.id),
                }
            })
            .collect();

        let incident = state.incident.as_ref().map(|i| IncidentView {
            title: i.title.clone(),
            body: i.body.clone(),
            options: i
                .options
                .iter()
                .map(|o| IncidentOptionView {
                    label: o.label.clone(),
                    note: o.note.clone(),
                })
                .collect(),
        });

        Self {
            run_id: run_id.clone(),
            tick: clock.elapsed_minutes,
            day: clock.day(),
            time_label: clock.time_label(),
            cash: state.ledger.cash(),
            paused_by_player: state.pause.by_player,
            paused_by_incident: state.pause.by_incident(),
            paused: state.pause.effective(),
            products,
            incident,
            recent_log: state.activity.lines(),
        }
    }
}
