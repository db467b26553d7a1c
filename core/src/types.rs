//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one in-game minute.
pub type Tick = u64;

/// Stable key for a product in the catalog.
pub type ProductId = String;

/// The canonical run identifier.
pub type RunId = String;
