//! Centralized configuration for Pitwall.
//!
//! All tunable simulation parameters are defined here to avoid hard-coded
//! values scattered throughout the codebase.

/// Tunable parameters of the lap-time model.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Time penalty for each pit stop, in seconds
    pub pit_stop_penalty: f64,
    /// Half-width of the per-lap uniform lap-time variation, in seconds.
    /// Each lap draws from `[-lap_time_variation, +lap_time_variation]`;
    /// zero disables variation entirely.
    pub lap_time_variation: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pit_stop_penalty: 22.0,
            lap_time_variation: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via `PITWALL_PIT_PENALTY` and
    /// `PITWALL_LAP_VARIATION` while maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(penalty) = std::env::var("PITWALL_PIT_PENALTY")
            && let Ok(seconds) = penalty.parse::<f64>()
        {
            config.pit_stop_penalty = seconds;
        }

        if let Ok(variation) = std::env::var("PITWALL_LAP_VARIATION")
            && let Ok(seconds) = variation.parse::<f64>()
        {
            config.lap_time_variation = seconds;
        }

        config
    }

    /// Creates a configuration for deterministic testing.
    ///
    /// Disables per-lap variation so lap times reduce to the closed-form
    /// degradation model.
    pub fn for_testing() -> Self {
        Self {
            lap_time_variation: 0.0,
            ..Default::default()
        }
    }
}
