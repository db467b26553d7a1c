//! Error types for infrastructure failures only.
//!
//! RULE: Domain boundary conditions (unknown product, insufficient cash,
//! stock underflow, bad option index) are NOT errors. They degrade to
//! no-ops with an optional log entry. SimError exists for config I/O
//! and serialization, nothing in the tick path constructs one.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
