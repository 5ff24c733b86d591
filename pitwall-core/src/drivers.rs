//! Driver roster reference data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A car number identifying a driver on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverNumber(pub u8);

impl DriverNumber {
    /// Creates a DriverNumber from a car number.
    pub fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the underlying car number as u8.
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DriverNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Car number to display name mapping.
///
/// Used only for labeling timing boards; simulation math never depends on
/// it, and an absent number is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRoster {
    drivers: BTreeMap<DriverNumber, String>,
}

/// Label used when a car number has no roster entry.
pub const UNKNOWN_DRIVER: &str = "Unknown Driver";

impl DriverRoster {
    /// Creates a roster from (number, name) pairs.
    pub fn new(entries: Vec<(DriverNumber, &str)>) -> Self {
        Self {
            drivers: entries
                .into_iter()
                .map(|(number, name)| (number, name.to_string()))
                .collect(),
        }
    }

    /// Returns the display name for a car number, falling back to
    /// `UNKNOWN_DRIVER` for numbers without an entry.
    pub fn display_name(&self, number: DriverNumber) -> &str {
        self.drivers
            .get(&number)
            .map_or(UNKNOWN_DRIVER, String::as_str)
    }

    /// Iterates entries ordered by car number.
    pub fn iter(&self) -> impl Iterator<Item = (DriverNumber, &str)> {
        self.drivers
            .iter()
            .map(|(number, name)| (*number, name.as_str()))
    }

    /// Returns all car numbers in roster order.
    pub fn numbers(&self) -> Vec<DriverNumber> {
        self.drivers.keys().copied().collect()
    }

    /// Returns the number of rostered drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Returns whether the roster has no drivers.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
