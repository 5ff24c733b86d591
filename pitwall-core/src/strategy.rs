//! Pit-stop strategy plans and the named strategy catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;
use crate::tires::TireModel;

/// An immutable pit/tire schedule for one car.
///
/// The plan is a template: simulations walk it with run-local cursors and
/// never consume or mutate it, so the same plan can be reused across any
/// number of runs. Value equality and hashing cover all three fields, which
/// makes structurally equal plans a single candidate for de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyPlan {
    /// Compound fitted at the start of the race
    pub start_tire: String,
    /// Lap numbers at which a pit stop occurs, strictly increasing
    pub pit_laps: Vec<u32>,
    /// Replacement compound for each stop, in stop order. May be shorter
    /// than `pit_laps`: uncovered stops keep the current compound.
    pub next_tires: Vec<String>,
}

impl StrategyPlan {
    /// Creates a plan from a start compound and pit schedule.
    pub fn new(start_tire: &str, pit_laps: Vec<u32>, next_tires: Vec<&str>) -> Self {
        Self {
            start_tire: start_tire.to_string(),
            pit_laps,
            next_tires: next_tires.into_iter().map(String::from).collect(),
        }
    }

    /// Returns the number of pit stops this plan schedules.
    pub fn pit_stops(&self) -> u32 {
        self.pit_laps.len() as u32
    }

    /// Validates the plan against a tire model and race length.
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - `start_tire` or a `next_tires`
    ///   entry names a compound absent from the model
    /// - `SimulationError::InvalidSchedule` - `pit_laps` is not strictly
    ///   increasing or an entry falls outside `[1, lap_count]`
    pub fn validate(&self, tires: &TireModel, lap_count: u32) -> Result<(), SimulationError> {
        tires.compound(&self.start_tire)?;
        for tire in &self.next_tires {
            tires.compound(tire)?;
        }

        let mut previous: Option<u32> = None;
        for &lap in &self.pit_laps {
            if lap < 1 || lap > lap_count {
                return Err(SimulationError::InvalidSchedule {
                    reason: format!("pit lap {lap} outside race distance of {lap_count} laps"),
                });
            }
            if let Some(previous) = previous
                && lap <= previous
            {
                return Err(SimulationError::InvalidSchedule {
                    reason: format!("pit laps must be strictly increasing, got {previous} then {lap}"),
                });
            }
            previous = Some(lap);
        }

        Ok(())
    }
}

impl fmt::Display for StrategyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start Tire: {}, Pit Laps: {:?}, Next Tires: {:?}",
            self.start_tire, self.pit_laps, self.next_tires
        )
    }
}

/// A catalog entry: a strategy plan with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStrategy {
    pub name: String,
    pub plan: StrategyPlan,
}

impl NamedStrategy {
    /// Creates a named catalog entry.
    pub fn new(name: &str, plan: StrategyPlan) -> Self {
        Self {
            name: name.to_string(),
            plan,
        }
    }
}

/// Ordered, named collection of strategy plans.
///
/// Serves both as the pool for random grid assignment and as the candidate
/// set for strategy scoring. Name lookup is case-insensitive, first match
/// wins, insertion order is preserved for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCatalog {
    strategies: Vec<NamedStrategy>,
}

impl StrategyCatalog {
    /// Creates a catalog from an ordered entry list.
    pub fn new(strategies: Vec<NamedStrategy>) -> Self {
        Self { strategies }
    }

    /// Resolves a strategy by name, case-insensitively.
    ///
    /// # Errors
    /// - `SimulationError::StrategyNotFound` - No entry matches the name
    pub fn find(&self, name: &str) -> Result<&NamedStrategy, SimulationError> {
        self.strategies
            .iter()
            .find(|strategy| strategy.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SimulationError::StrategyNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the plans of all entries, in catalog order.
    pub fn plans(&self) -> Vec<StrategyPlan> {
        self.strategies
            .iter()
            .map(|strategy| strategy.plan.clone())
            .collect()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedStrategy> {
        self.strategies.iter()
    }

    /// Returns the number of cataloged strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tires::TireCompound;

    fn test_tires() -> TireModel {
        TireModel::new(vec![
            TireCompound::new("soft", 95.0, 0.17, 12),
            TireCompound::new("medium", 95.8, 0.10, 20),
            TireCompound::new("hard", 96.8, 0.07, 35),
        ])
    }

    #[test]
    fn test_valid_plan_passes_validation() {
        let plan = StrategyPlan::new("soft", vec![20, 40], vec!["medium", "hard"]);
        assert!(plan.validate(&test_tires(), 57).is_ok());
        assert_eq!(plan.pit_stops(), 2);
    }

    #[test]
    fn test_unknown_start_tire_is_invalid_strategy() {
        let plan = StrategyPlan::new("ultrasoft", vec![20], vec!["hard"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidStrategy { .. })
        ));
    }

    #[test]
    fn test_unknown_replacement_tire_is_invalid_strategy() {
        let plan = StrategyPlan::new("soft", vec![20], vec!["intermediate"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidStrategy { .. })
        ));
    }

    #[test]
    fn test_non_increasing_pit_laps_are_invalid_schedule() {
        let plan = StrategyPlan::new("soft", vec![40, 20], vec!["medium", "hard"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidSchedule { .. })
        ));

        let plan = StrategyPlan::new("soft", vec![20, 20], vec!["medium", "hard"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_out_of_range_pit_lap_is_invalid_schedule() {
        let plan = StrategyPlan::new("soft", vec![60], vec!["hard"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidSchedule { .. })
        ));

        let plan = StrategyPlan::new("soft", vec![0], vec!["hard"]);
        assert!(matches!(
            plan.validate(&test_tires(), 57),
            Err(SimulationError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_short_next_tires_is_allowed() {
        // Stops without a replacement compound are policy, not an error.
        let plan = StrategyPlan::new("soft", vec![20, 40], vec!["hard"]);
        assert!(plan.validate(&test_tires(), 57).is_ok());
    }

    #[test]
    fn test_structurally_equal_plans_share_identity() {
        let a = StrategyPlan::new("soft", vec![20], vec!["hard"]);
        let b = StrategyPlan::new("soft", vec![20], vec!["hard"]);
        let c = StrategyPlan::new("soft", vec![21], vec!["hard"]);

        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_catalog_lookup_is_case_insensitive() {
        let catalog = StrategyCatalog::new(vec![NamedStrategy::new(
            "Aggressive",
            StrategyPlan::new("soft", vec![20, 40], vec!["medium", "hard"]),
        )]);

        assert!(catalog.find("aggressive").is_ok());
        assert!(catalog.find("AGGRESSIVE").is_ok());
        assert!(matches!(
            catalog.find("conservative"),
            Err(SimulationError::StrategyNotFound { .. })
        ));
    }
}
