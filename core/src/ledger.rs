//! The ledger — all mutable economy state.
//!
//! RULES:
//!   - Cash and stock never go negative. Deductions clamp at zero;
//!     the clamp is a deliberate floor, not an error.
//!   - spend() is the sole gate against overspending. Anything that
//!     must be all-or-nothing goes through it.
//!   - Absent stock/sales keys read as zero.

use crate::types::ProductId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Ledger {
    cash: f64,
    stock: HashMap<ProductId, u64>,
    lifetime_sales: HashMap<ProductId, u64>,
    daily_sales: HashMap<ProductId, u64>,
}

impl Ledger {
    pub fn new(starting_cash: f64, starting_stock: impl IntoIterator<Item = (ProductId, u64)>) -> Self {
        Self {
            cash: starting_cash.max(0.0),
            stock: starting_stock.into_iter().collect(),
            lifetime_sales: HashMap::new(),
            daily_sales: HashMap::new(),
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn stock_of(&self, product_id: &str) -> u64 {
        self.stock.get(product_id).copied().unwrap_or(0)
    }

    pub fn daily_sales_of(&self, product_id: &str) -> u64 {
        self.daily_sales.get(product_id).copied().unwrap_or(0)
    }

    pub fn lifetime_sales_of(&self, product_id: &str) -> u64 {
        self.lifetime_sales.get(product_id).copied().unwrap_or(0)
    }

    /// Apply a stock delta, clamped at zero. Negative deltas beyond the
    /// available stock are absorbed, not rejected. Never fails.
    pub fn adjust_stock(&mut self, product_id: &str, delta: i64) {
        let current = self.stock_of(product_id) as i64;
        let next = (current + delta).max(0) as u64;
        self.stock.insert(product_id.to_string(), next);
    }

    /// Record a completed sale: bump both sales counters, credit the
    /// revenue, and deduct the units sold. Returns the revenue.
    ///
    /// Callers guarantee `units <= stock_of(product_id)`; the stock
    /// deduction still clamps via adjust_stock either way.
    pub fn record_sale(&mut self, product_id: &str, units: u64, sell_price: f64) -> f64 {
        *self.lifetime_sales.entry(product_id.to_string()).or_insert(0) += units;
        *self.daily_sales.entry(product_id.to_string()).or_insert(0) += units;
        let revenue = units as f64 * sell_price;
        self.cash += revenue;
        self.adjust_stock(product_id, -(units as i64));
        revenue
    }

    /// Deduct `amount` if affordable. Returns false without mutating
    /// when cash is short.
    pub fn spend(&mut self, amount: f64) -> bool {
        if self.cash < amount {
            return false;
        }
        self.cash -= amount;
        true
    }

    /// Deduct `amount` unconditionally, clamped at a zero cash floor.
    /// Used for incident costs, which are not refusable.
    pub fn forfeit(&mut self, amount: f64) {
        self.cash = (self.cash - amount).max(0.0);
    }

    /// Zero every daily sales counter. Called on day-boundary crossings.
    pub fn reset_daily_sales(&mut self) {
        self.daily_sales.clear();
    }
}
