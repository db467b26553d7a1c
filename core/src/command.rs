//! All player-issued commands.
//!
//! Commands execute synchronously on the engine's single execution
//! context, so they are atomic with respect to any tick. Invalid
//! commands degrade to no-ops — the engine validates defensively even
//! though the UI is expected to.

use serde::{Deserialize, Serialize};
use crate::types::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// Restock `amount` units of a product, all-or-nothing against cash.
    BuyStock { product_id: ProductId, amount: u64 },
    /// Flip the explicit player pause.
    TogglePause,
    /// Choose an option of the pending incident.
    ResolveIncident { option_index: usize },
}
