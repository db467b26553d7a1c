//! Incident interrupts — the at-most-one pending narrative event awaiting
//! a player choice.
//!
//! State machine: Idle (no active incident) → AwaitingChoice (incident
//! set, incident pause raised) → Idle again once an option is resolved.
//! A trigger attempt while one is pending is a no-op; the guard lives
//! at the entry of update().
//!
//! Option effects are data, not closures: a tagged IncidentEffect variant
//! interpreted by apply(). New incident types get new variants without
//! touching the trigger/resolve machinery.

use crate::{
    config::ShopConfig,
    error::SimResult,
    event::SimEvent,
    rng::SubsystemRng,
    state::ShopState,
    subsystem::SimSubsystem,
    types::Tick,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncidentEffect {
    /// Flat cost, clamped at the zero cash floor.
    SampleCost { cost: f64 },
    /// Gamble: avoid_chance of nothing, otherwise a random product
    /// loses units_lost stock (floor-clamped).
    HaggleRisk { avoid_chance: f64, units_lost: u64 },
}

impl IncidentEffect {
    /// Interpret the effect against the world. Total: every branch,
    /// including an empty catalog on the haggle path, is a defined no-op
    /// or clamped mutation.
    pub fn apply(&self, state: &mut ShopState, rng: &mut SubsystemRng) {
        match self {
            Self::SampleCost { cost } => {
                state.ledger.forfeit(*cost);
            }
            Self::HaggleRisk {
                avoid_chance,
                units_lost,
            } => {
                if rng.chance(*avoid_chance) {
                    return;
                }
                let Some(target) = state.catalog.pick_uniform(rng) else {
                    return;
                };
                let target_id = target.id.clone();
                state.ledger.adjust_stock(&target_id, -(*units_lost as i64));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentOption {
    pub label: String,
    pub note: Option<String>,
    pub effect: IncidentEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveIncident {
    pub title: String,
    pub body: String,
    pub options: Vec<IncidentOption>,
}

/// The stock inspection incident. Fixed content, two options.
fn quick_inspection() -> ActiveIncident {
    ActiveIncident {
        title: "Quick inspection".to_string(),
        body: "A city inspector shows up.".to_string(),
        options: vec![
            IncidentOption {
                label: "Offer samples (-$5)".to_string(),
                note: Some("Costs $5, no other risk.".to_string()),
                effect: IncidentEffect::SampleCost { cost: 5.0 },
            },
            IncidentOption {
                label: "Haggle".to_string(),
                note: Some("50% chance to avoid cost; 50% chance to lose 2 stock.".to_string()),
                effect: IncidentEffect::HaggleRisk {
                    avoid_chance: 0.5,
                    units_lost: 2,
                },
            },
        ],
    }
}

pub struct IncidentSubsystem {
    incident_chance: f64,
}

impl IncidentSubsystem {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            incident_chance: config.incident_chance,
        }
    }
}

impl SimSubsystem for IncidentSubsystem {
    fn name(&self) -> &'static str {
        "incident"
    }

    fn update(
        &mut self,
        tick: Tick,
        state: &mut ShopState,
        rng: &mut SubsystemRng,
    ) -> SimResult<Vec<SimEvent>> {
        // Already awaiting a choice: no second incident, no draw.
        if state.incident.is_some() {
            return Ok(vec![]);
        }
        if !rng.chance(self.incident_chance) {
            return Ok(vec![]);
        }

        let incident = quick_inspection();
        let title = incident.title.clone();
        state.incident = Some(incident);
        state.pause.set_incident(true);
        log::info!("tick={tick} incident: '{title}' awaiting choice");
        Ok(vec![SimEvent::IncidentTriggered { tick, title }])
    }
}

/// Resolve the pending incident by option index.
///
/// Out-of-range index or no pending incident: no-op, the incident (if any)
/// stays pending. A valid index applies the option's effect exactly once,
/// clears the incident, and drops the incident pause.
pub fn resolve(
    state: &mut ShopState,
    option_index: usize,
    rng: &mut SubsystemRng,
    tick: Tick,
) -> Option<SimEvent> {
    let incident = state.incident.as_ref()?;
    let option = incident.options.get(option_index)?.clone();

    option.effect.apply(state, rng);
    state.incident = None;
    state.pause.set_incident(false);
    log::info!("tick={tick} incident: resolved '{}'", option.label);
    Some(SimEvent::IncidentResolved {
        tick,
        label: option.label,
    })
}
