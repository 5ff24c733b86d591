//! Circuit reference data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// Identifier of a circuit in the reference data.
///
/// Matches the circuit keys used by public motorsport data feeds, so tracks
/// can be cross-referenced with externally sourced race results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitKey(pub u16);

impl CircuitKey {
    /// Creates a CircuitKey from its numeric identifier.
    pub fn new(key: u16) -> Self {
        Self(key)
    }

    /// Returns the underlying identifier as u16.
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CircuitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A circuit with its race distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub circuit_key: CircuitKey,
    pub name: String,
    /// Lap length in miles, informational only
    pub length_miles: f64,
    /// Race distance in laps
    pub lap_count: u32,
}

impl Track {
    /// Creates a track entry.
    pub fn new(circuit_key: CircuitKey, name: &str, length_miles: f64, lap_count: u32) -> Self {
        Self {
            circuit_key,
            name: name.to_string(),
            length_miles,
            lap_count,
        }
    }
}

/// Keyed collection of circuits.
///
/// Immutable reference data; iteration is ordered by circuit key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCatalog {
    tracks: BTreeMap<CircuitKey, Track>,
}

impl TrackCatalog {
    /// Creates a catalog from a track list.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks
                .into_iter()
                .map(|track| (track.circuit_key, track))
                .collect(),
        }
    }

    /// Looks up a track by circuit key.
    ///
    /// # Errors
    /// - `SimulationError::TrackNotFound` - No track with this key exists
    pub fn track(&self, circuit_key: CircuitKey) -> Result<&Track, SimulationError> {
        self.tracks
            .get(&circuit_key)
            .ok_or(SimulationError::TrackNotFound { circuit_key })
    }

    /// Iterates tracks ordered by circuit key.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Returns the number of cataloged tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns whether the catalog has no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
