//! Run configuration: starting economy, catalog data, process probabilities.
//!
//! Defaults reproduce the stock corner-shop scenario. A JSON file with the
//! same shape can override any of it for custom runs.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Real-time period between ticks, for drivers that schedule the engine.
/// The engine itself holds no timer state.
pub const TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    pub name: String,
    pub buy_cost: f64,
    pub sell_price: f64,
    pub starting_stock: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub starting_cash: f64,
    /// Time of day the simulation starts at, in minutes past midnight.
    pub start_offset_minutes: u64,
    /// Per-tick probability that a customer arrives.
    pub customer_arrival_chance: f64,
    /// Per-tick probability that an incident fires (while none is active).
    pub incident_chance: f64,
    /// Largest quantity a single customer will ask for.
    pub max_basket_size: u64,
    pub products: Vec<ProductConfig>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            starting_cash: 50.0,
            start_offset_minutes: 8 * 60,
            customer_arrival_chance: 0.45,
            incident_chance: 0.08,
            max_basket_size: 3,
            products: vec![
                ProductConfig {
                    id: "snack".into(),
                    name: "Snacks".into(),
                    buy_cost: 3.0,
                    sell_price: 5.0,
                    starting_stock: 10,
                },
                ProductConfig {
                    id: "drink".into(),
                    name: "Drinks".into(),
                    buy_cost: 2.0,
                    sell_price: 4.0,
                    starting_stock: 6,
                },
                ProductConfig {
                    id: "toy".into(),
                    name: "Toys".into(),
                    buy_cost: 6.0,
                    sell_price: 10.0,
                    starting_stock: 2,
                },
            ],
        }
    }
}

impl ShopConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ShopConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulation cannot run sensibly with.
    /// Product-id uniqueness is the Catalog's lifetime invariant.
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..=1.0).contains(&self.customer_arrival_chance) {
            return Err(SimError::Config(format!(
                "customer_arrival_chance {} outside [0, 1]",
                self.customer_arrival_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.incident_chance) {
            return Err(SimError::Config(format!(
                "incident_chance {} outside [0, 1]",
                self.incident_chance
            )));
        }
        if self.max_basket_size == 0 {
            return Err(SimError::Config("max_basket_size must be >= 1".into()));
        }
        for (i, product) in self.products.iter().enumerate() {
            if product.buy_cost <= 0.0 || product.sell_price <= 0.0 {
                return Err(SimError::Config(format!(
                    "product '{}' has non-positive pricing",
                    product.id
                )));
            }
            if self.products[..i].iter().any(|p| p.id == product.id) {
                return Err(SimError::Config(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }
        Ok(())
    }
}
