//! Error types
//!
//! Nothing here is fatal to a running session: the simulation drops
//! requests that fail with `SimError` and carries on.

/// Entity pool errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("Pool full")]
    PoolFull,
    #[error("Slot {0} is empty or out of range")]
    SlotNotFound(usize),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
