//! The factory layout: ordered stations and the conveyor path.
//!
//! Station order *is* the transition sequence -- a token at station `i`
//! transitions to station `i + 1`, and the last entry is the synthetic
//! "Completed" terminal station. The model is read-only after construction;
//! all validation happens in the configuration layer before a [`PathModel`]
//! is ever built.

use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// A named point in the factory layout with an associated processing speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique name, used as the HUD area label.
    pub name: String,
    /// Position on the factory floor.
    pub position: Vec2,
    /// Processing speed in time units⁻¹. Drives the per-step dwell time of
    /// tokens heading toward this station.
    pub speed: f32,
}

/// The ordered waypoint sequence and station-speed lookup table.
///
/// Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathModel {
    stations: Vec<Station>,
    waypoints: Vec<Vec2>,
}

impl PathModel {
    /// Build a path model from an ordered station list and an ordered
    /// conveyor waypoint list. Both are expected to be non-empty; the
    /// configuration layer rejects anything else before this runs.
    pub fn new(stations: Vec<Station>, waypoints: Vec<Vec2>) -> Self {
        Self {
            stations,
            waypoints,
        }
    }

    /// The ordered stations, terminal included.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The ordered conveyor waypoints.
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Number of conveyor waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Total station count, including the terminal station.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Index of the terminal ("Completed") station.
    pub fn terminal_index(&self) -> usize {
        self.stations.len() - 1
    }

    /// Station at `index`.
    pub fn station(&self, index: usize) -> &Station {
        &self.stations[index]
    }

    /// Processing speed of the station at `index`.
    pub fn speed_of(&self, index: usize) -> f32 {
        self.stations[index].speed
    }

    /// The entrance station (index 0), where tokens spawn.
    pub fn entrance(&self) -> &Station {
        &self.stations[0]
    }

    /// The terminal station, where finished tokens come to rest.
    pub fn terminal(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }
}
