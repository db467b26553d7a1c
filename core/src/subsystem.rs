//! Subsystem trait and registry contract.
//!
//! RULE: Every per-tick stochastic process implements SimSubsystem.
//! The engine calls update() on each registered subsystem in
//! registration order, every unpaused tick. Execution order is fixed
//! and documented in engine.rs.

use crate::{error::SimResult, event::SimEvent, rng::SubsystemRng, state::ShopState, types::Tick};

/// The contract every subsystem must fulfill.
pub trait SimSubsystem: Send {
    /// Unique stable name for this subsystem.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `tick`:  the current tick number
    /// - `state`: the shared world state, mutated in place
    /// - `rng`:   this subsystem's deterministic RNG stream
    ///
    /// Returns the events this subsystem produced this tick.
    fn update(
        &mut self,
        tick: Tick,
        state: &mut ShopState,
        rng: &mut SubsystemRng,
    ) -> SimResult<Vec<SimEvent>>;
}
