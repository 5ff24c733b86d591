//! Error types for the simulation engine.

use crate::track::CircuitKey;

/// Errors that can occur during race simulation and strategy scoring.
///
/// Covers all failure modes across plan validation, reference-data lookup,
/// and grid simulation. None of these are recovered internally; callers
/// decide presentation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("Track with circuit key {circuit_key} not found")]
    TrackNotFound { circuit_key: CircuitKey },

    #[error("Strategy '{name}' not found")]
    StrategyNotFound { name: String },

    #[error("Invalid strategy: {reason}")]
    InvalidStrategy { reason: String },

    #[error("Invalid pit schedule: {reason}")]
    InvalidSchedule { reason: String },
}
