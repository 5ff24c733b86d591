//! Tire compound reference data and degradation model.

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// A tire compound with its performance characteristics.
///
/// Lap time for a car on this compound is modeled as
/// `base_lap_time + wear_level * degradation_rate` plus per-lap variation.
/// Degradation is a linear scalar, not a physical tire model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireCompound {
    /// Compound name used by strategy plans ("soft", "medium", "hard")
    pub name: String,
    /// Lap time on a fresh tire, in seconds
    pub base_lap_time: f64,
    /// Added time per lap of wear, in seconds
    pub degradation_rate: f64,
    /// Advisory lap count before the compound is considered worn.
    /// Informational only: degradation keeps accumulating past it.
    pub wear_limit: u32,
}

impl TireCompound {
    /// Creates a compound from its performance parameters.
    pub fn new(name: &str, base_lap_time: f64, degradation_rate: f64, wear_limit: u32) -> Self {
        Self {
            name: name.to_string(),
            base_lap_time,
            degradation_rate,
            wear_limit,
        }
    }

    /// Returns the modeled lap time at the given wear level, before
    /// per-lap variation is applied.
    pub fn lap_time_at_wear(&self, wear_level: u32) -> f64 {
        self.base_lap_time + f64::from(wear_level) * self.degradation_rate
    }
}

/// Ordered collection of tire compounds available to strategy plans.
///
/// Immutable reference data, injected into the engine rather than baked in
/// as globals. Iteration preserves insertion order for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireModel {
    compounds: Vec<TireCompound>,
}

impl TireModel {
    /// Creates a tire model from an ordered compound list.
    pub fn new(compounds: Vec<TireCompound>) -> Self {
        Self { compounds }
    }

    /// Looks up a compound by name.
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - No compound with this name exists
    pub fn compound(&self, name: &str) -> Result<&TireCompound, SimulationError> {
        self.compounds
            .iter()
            .find(|compound| compound.name == name)
            .ok_or_else(|| SimulationError::InvalidStrategy {
                reason: format!("unknown tire compound '{name}'"),
            })
    }

    /// Returns whether a compound with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.compounds.iter().any(|compound| compound.name == name)
    }

    /// Iterates compounds in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TireCompound> {
        self.compounds.iter()
    }

    /// Returns the number of registered compounds.
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    /// Returns whether the model has no compounds.
    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> TireModel {
        TireModel::new(vec![
            TireCompound::new("soft", 95.0, 0.17, 12),
            TireCompound::new("medium", 95.8, 0.10, 20),
            TireCompound::new("hard", 96.8, 0.07, 35),
        ])
    }

    #[test]
    fn test_compound_lookup() {
        let model = test_model();
        let soft = model.compound("soft").unwrap();
        assert_eq!(soft.base_lap_time, 95.0);
        assert_eq!(soft.degradation_rate, 0.17);
        assert_eq!(soft.wear_limit, 12);
    }

    #[test]
    fn test_unknown_compound_is_invalid_strategy() {
        let model = test_model();
        let result = model.compound("ultrasoft");
        assert!(matches!(
            result,
            Err(SimulationError::InvalidStrategy { .. })
        ));
    }

    #[test]
    fn test_lap_time_at_wear_is_linear() {
        let soft = TireCompound::new("soft", 95.0, 0.17, 12);
        assert_eq!(soft.lap_time_at_wear(0), 95.0);
        assert_eq!(soft.lap_time_at_wear(10), 95.0 + 10.0 * 0.17);
        // No clamp at the wear limit
        assert_eq!(soft.lap_time_at_wear(40), 95.0 + 40.0 * 0.17);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let model = test_model();
        let names: Vec<&str> = model.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["soft", "medium", "hard"]);
    }
}
