//! shopsim-core — the simulation engine for a small real-time
//! shop-management game.
//!
//! A player manages cash and inventory while simulated customers arrive
//! stochastically and random incidents interrupt play with a choice.
//! This crate is the whole of the game logic; rendering and window
//! plumbing live outside and only read snapshots / submit commands.

pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod customer_subsystem;
pub mod engine;
pub mod error;
pub mod event;
pub mod incident_subsystem;
pub mod ledger;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod subsystem;
pub mod types;
