//! The product catalog — the fixed set of sellable product definitions.
//!
//! RULE: the catalog is built once at engine construction and never
//! mutated afterwards. Ids are unique for the lifetime of the engine
//! (enforced by ShopConfig::validate).

use crate::{config::ProductConfig, rng::SubsystemRng, types::ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDef {
    pub id: ProductId,
    pub name: String,
    pub buy_cost: f64,
    pub sell_price: f64,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ProductDef>,
}

impl Catalog {
    pub fn from_config(products: &[ProductConfig]) -> Self {
        Self {
            products: products
                .iter()
                .map(|p| ProductDef {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    buy_cost: p.buy_cost,
                    sell_price: p.sell_price,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductDef> {
        self.products.iter()
    }

    pub fn get(&self, product_id: &str) -> Option<&ProductDef> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Pick one product uniformly at random. None on an empty catalog.
    pub fn pick_uniform(&self, rng: &mut SubsystemRng) -> Option<&ProductDef> {
        if self.products.is_empty() {
            return None;
        }
        let index = rng.next_u64_below(self.products.len() as u64) as usize;
        self.products.get(index)
    }
}
