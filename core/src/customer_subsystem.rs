//! Customer arrival process.
//!
//! Each tick, independently of incidents, a customer arrives with a fixed
//! probability. An arriving customer picks one product uniformly at random
//! and asks for 1..=max_basket_size units. Fulfillment is partial, never
//! an oversell: the quantity clamp means record_sale can never drive
//! stock negative.

use crate::{
    config::ShopConfig,
    error::SimResult,
    event::SimEvent,
    rng::SubsystemRng,
    state::ShopState,
    subsystem::SimSubsystem,
    types::Tick,
};

pub struct CustomerSubsystem {
    arrival_chance: f64,
    max_basket_size: u64,
}

impl CustomerSubsystem {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            arrival_chance: config.customer_arrival_chance,
            max_basket_size: config.max_basket_size,
        }
    }
}

impl SimSubsystem for CustomerSubsystem {
    fn name(&self) -> &'static str {
        "customer"
    }

    fn update(
        &mut self,
        tick: Tick,
        state: &mut ShopState,
        rng: &mut SubsystemRng,
    ) -> SimResult<Vec<SimEvent>> {
        if !rng.chance(self.arrival_chance) {
            return Ok(vec![]);
        }
        let Some(pick) = state.catalog.pick_uniform(rng) else {
            return Ok(vec![]);
        };
        let product_id = pick.id.clone();
        let product_name = pick.name.clone();
        let sell_price = pick.sell_price;

        let desired = 1 + rng.next_u64_below(self.max_basket_size);
        let available = state.ledger.stock_of(&product_id);
        if available == 0 {
            log::debug!("tick={tick} customer: wanted {product_id}, out of stock");
            return Ok(vec![SimEvent::CustomerTurnedAway { tick, product_id }]);
        }

        let units = desired.min(available);
        let revenue = state.ledger.record_sale(&product_id, units, sell_price);
        log::debug!("tick={tick} customer: bought {units} {product_id} for ${revenue:.2}");
        Ok(vec![SimEvent::CustomerPurchased {
            tick,
            product_id,
            product_name,
            units,
            revenue,
        }])
    }
}
