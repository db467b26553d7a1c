//! The simulation engine — one discrete tick, orchestrated.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Pause gate — a tick while effectively paused is a no-op.
//!   2. Clock advance (+1 minute).
//!   3. Day-rollover housekeeping (daily sales reset). Runs before the
//!      stochastic processes so sales attribute to the correct day.
//!   4. Customer subsystem.
//!   5. Incident subsystem — last, so an incident never preempts the
//!      same-tick sale accounting.
//!
//! RULES:
//!   - Subsystems execute in registration order, every tick.
//!   - All randomness flows through the RngBank.
//!   - Player commands run synchronously between ticks and are atomic
//!     with respect to them; the engine owns no timer — an external
//!     driver calls tick() on a schedule.

use crate::{
    clock::ShopClock,
    command::PlayerCommand,
    config::ShopConfig,
    customer_subsystem::CustomerSubsystem,
    error::SimResult,
    event::SimEvent,
    incident_subsystem::{self, IncidentSubsystem},
    rng::{RngBank, SubsystemSlot},
    snapshot::ShopSnapshot,
    state::ShopState,
    subsystem::SimSubsystem,
    types::RunId,
};

pub struct ShopEngine {
    pub run_id: RunId,
    pub clock: ShopClock,
    pub state: ShopState,
    rng_bank: RngBank,
    subsystems: Vec<(SubsystemSlot, Box<dyn SimSubsystem>)>,
}

impl ShopEngine {
    /// Build a fully wired engine with all subsystems registered.
    pub fn build(run_id: RunId, seed: u64, config: ShopConfig) -> SimResult<Self> {
        config.validate()?;
        let mut engine = Self {
            clock: ShopClock::new(config.start_offset_minutes),
            state: ShopState::from_config(&config),
            rng_bank: RngBank::new(seed),
            subsystems: Vec::new(),
            run_id,
        };
        // EXECUTION ORDER — fixed, documented, never reordered.
        engine.register(
            SubsystemSlot::Customer,
            Box::new(CustomerSubsystem::new(&config)),
        );
        engine.register(
            SubsystemSlot::Incident,
            Box::new(IncidentSubsystem::new(&config)),
        );
        Ok(engine)
    }

    /// Register a subsystem. Call in the documented execution order.
    pub fn register(&mut self, slot: SubsystemSlot, subsystem: Box<dyn SimSubsystem>) {
        self.subsystems.push((slot, subsystem));
    }

    /// Advance one tick. No-op while effectively paused — the driver is
    /// expected to check paused() first, but a late tick must not panic
    /// or advance time.
    pub fn tick(&mut self) -> SimResult<Vec<SimEvent>> {
        if self.state.pause.effective() {
            log::debug!("tick skipped: engine paused");
            return Ok(vec![]);
        }

        let tick = self.clock.advance();
        let mut tick_events = vec![SimEvent::TickStarted { tick }];

        // Day rollover runs before any subsystem touches the ledger.
        if let Some(day) = self.clock.crossed_day_boundary() {
            self.state.ledger.reset_daily_sales();
            log::debug!("tick={tick} engine: day rolled over to {day}");
            tick_events.push(SimEvent::DayRolledOver { tick, day });
        }

        // Execute each subsystem in registration order.
        for (slot, subsystem) in &mut self.subsystems {
            let rng = self.rng_bank.for_subsystem(*slot);
            let new_events = subsystem.update(tick, &mut self.state, rng)?;
            for event in &new_events {
                if let Some(line) = event.log_line() {
                    self.state.activity.push(line);
                }
            }
            tick_events.extend(new_events);
        }

        tick_events.push(SimEvent::TickCompleted { tick });
        Ok(tick_events)
    }

    /// Run n ticks in a loop. Used for testing and fast-forward.
    /// Ticks spent paused (e.g. behind a pending incident) are no-ops.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(self.tick()?);
        }
        Ok(events)
    }

    /// Whether the driver should suppress the next scheduled tick.
    pub fn paused(&self) -> bool {
        self.state.pause.effective()
    }

    // ── Player command surface ───────────────────────────────────────

    /// Restock `amount` units, all-or-nothing against available cash.
    /// Unknown product id or zero amount: silent no-op.
    pub fn buy_stock(&mut self, product_id: &str, amount: u64) -> Vec<SimEvent> {
        let tick = self.clock.elapsed_minutes;
        let Some(product) = self.state.catalog.get(product_id) else {
            log::debug!("buy_stock ignored: unknown product '{product_id}'");
            return vec![];
        };
        if amount == 0 {
            log::debug!("buy_stock ignored: zero amount for '{product_id}'");
            return vec![];
        }
        let cost = amount as f64 * product.buy_cost;
        let product_name = product.name.clone();

        let event = if self.state.ledger.spend(cost) {
            self.state.ledger.adjust_stock(product_id, amount as i64);
            SimEvent::StockPurchased {
                tick,
                product_id: product_id.to_string(),
                product_name,
                units: amount,
                cost,
            }
        } else {
            SimEvent::RestockRejected {
                tick,
                product_id: product_id.to_string(),
            }
        };
        if let Some(line) = event.log_line() {
            self.state.activity.push(line);
        }
        vec![event]
    }

    /// Flip the explicit player pause. Independent of the incident pause.
    pub fn toggle_player_pause(&mut self) {
        self.state.pause.toggle_player();
        log::debug!("player pause now {}", self.state.pause.by_player);
    }

    /// Resolve the pending incident. Invalid index or no pending
    /// incident: no-op.
    pub fn resolve_incident(&mut self, option_index: usize) -> Vec<SimEvent> {
        let tick = self.clock.elapsed_minutes;
        let rng = self.rng_bank.for_subsystem(SubsystemSlot::Incident);
        match incident_subsystem::resolve(&mut self.state, option_index, rng, tick) {
            Some(event) => {
                if let Some(line) = event.log_line() {
                    self.state.activity.push(line);
                }
                vec![event]
            }
            None => vec![],
        }
    }

    /// Dispatch a command from the UI collaborator.
    pub fn apply_command(&mut self, command: PlayerCommand) -> Vec<SimEvent> {
        match command {
            PlayerCommand::BuyStock { product_id, amount } => self.buy_stock(&product_id, amount),
            PlayerCommand::TogglePause => {
                self.toggle_player_pause();
                vec![]
            }
            PlayerCommand::ResolveIncident { option_index } => self.resolve_incident(option_index),
        }
    }

    /// Publish the current read-only state for the UI.
    pub fn snapshot(&self) -> ShopSnapshot {
        ShopSnapshot::capture(&self.run_id, &self.clock, &self.state)
    }
}
