//! Per-car lap-by-lap simulation.

use rand::Rng;
use tracing::trace;

use super::RaceTime;
use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::strategy::StrategyPlan;
use crate::tires::TireModel;

/// Advances one car through a race distance under a strategy plan.
///
/// The plan is walked with run-local cursors and never mutated, so the same
/// template can be simulated any number of times. All randomness comes from
/// the generator passed to [`simulate`](Self::simulate); a seeded generator
/// makes runs fully reproducible.
#[derive(Debug, Clone, Copy)]
pub struct LapSimulator<'a> {
    tires: &'a TireModel,
    lap_time_variation: f64,
}

impl<'a> LapSimulator<'a> {
    /// Creates a simulator over the given tire model.
    pub fn new(tires: &'a TireModel, config: &SimulationConfig) -> Self {
        Self {
            tires,
            lap_time_variation: config.lap_time_variation,
        }
    }

    /// Simulates a full race for one car.
    ///
    /// Each lap costs `base_lap_time + wear_level * degradation_rate` plus a
    /// uniform variation drawn from the supplied generator. A lap listed in
    /// the plan's `pit_laps` first incurs the pit stop penalty, resets wear,
    /// and fits the next replacement compound if one remains; the lap itself
    /// is then driven on the new tire. Wear past a compound's `wear_limit`
    /// keeps degrading linearly without a cap.
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - Plan names an unknown compound
    /// - `SimulationError::InvalidSchedule` - `lap_count` is zero, or the
    ///   pit laps are not strictly increasing within `[1, lap_count]`
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        plan: &StrategyPlan,
        lap_count: u32,
        pit_stop_penalty: f64,
        rng: &mut R,
    ) -> Result<RaceTime, SimulationError> {
        if lap_count == 0 {
            return Err(SimulationError::InvalidSchedule {
                reason: "no laps to simulate".to_string(),
            });
        }
        plan.validate(self.tires, lap_count)?;

        let mut current = self.tires.compound(&plan.start_tire)?;
        // Run-local cursors over the borrowed plan; the template survives.
        let mut pit_cursor = 0;
        let mut tire_cursor = 0;
        let mut wear_level = 0u32;
        let mut total_time = 0.0;
        let mut fastest_lap = f64::INFINITY;

        for lap in 1..=lap_count {
            if pit_cursor < plan.pit_laps.len() && plan.pit_laps[pit_cursor] == lap {
                pit_cursor += 1;
                total_time += pit_stop_penalty;
                wear_level = 0;
                if tire_cursor < plan.next_tires.len() {
                    current = self.tires.compound(&plan.next_tires[tire_cursor])?;
                    tire_cursor += 1;
                }
                trace!(lap, compound = %current.name, "pit stop");
            }

            let variation = if self.lap_time_variation > 0.0 {
                rng.random_range(-self.lap_time_variation..=self.lap_time_variation)
            } else {
                0.0
            };
            let lap_time = current.lap_time_at_wear(wear_level) + variation;

            fastest_lap = fastest_lap.min(lap_time);
            total_time += lap_time;
            wear_level += 1;
        }

        Ok(RaceTime {
            total_time,
            fastest_lap,
        })
    }
}
