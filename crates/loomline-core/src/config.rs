//! The simulation configuration record and its startup validation.
//!
//! A [`SimConfig`] is consumed once, at engine construction; nothing in it
//! changes afterwards. Validation failures are fatal before any tick runs.
//!
//! Stations are an *ordered* list -- the order is the transition sequence
//! and the last entry is the terminal "Completed" station.

use crate::path::Station;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Configuration rejections, all fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("station list is empty")]
    EmptyStations,
    #[error("conveyor path has no waypoints")]
    EmptyPath,
    #[error("station '{name}' has non-positive speed {speed}")]
    NonPositiveSpeed { name: String, speed: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("grid resolution {width}x{height} has zero area")]
    ZeroResolution { width: u32, height: u32 },
}

// ---------------------------------------------------------------------------
// Configuration record
// ---------------------------------------------------------------------------

/// Everything the engine needs, in one structured record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ordered station layout; the last entry is the terminal station.
    pub stations: Vec<Station>,
    /// Ordered conveyor waypoints forming one continuous path.
    pub conveyor_path: Vec<Vec2>,
    /// Token radius, presentation-only. Carried through to snapshots.
    #[serde(default = "default_material_radius")]
    pub material_radius: f32,
    /// Freeze check: distance beyond which a token is considered far from
    /// its next station.
    pub distance_threshold: f32,
    /// Freeze check: seconds of dwell beyond which a far token is frozen.
    pub time_threshold: f32,
    /// Spawn events per second.
    pub item_rate: f32,
    /// Path-progress increment applied per eligible tick.
    pub steps_per_second: f32,
    /// Occupancy grid resolution as (width, height).
    pub resolution: (u32, u32),
}

fn default_material_radius() -> f32 {
    1.0
}

impl SimConfig {
    /// Reject malformed configurations before the engine is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stations.is_empty() {
            return Err(ConfigError::EmptyStations);
        }
        if self.conveyor_path.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        for station in &self.stations {
            if station.speed <= 0.0 {
                return Err(ConfigError::NonPositiveSpeed {
                    name: station.name.clone(),
                    speed: station.speed,
                });
            }
        }
        if self.item_rate <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "item_rate",
                value: self.item_rate,
            });
        }
        if self.steps_per_second <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "steps_per_second",
                value: self.steps_per_second,
            });
        }
        let (w, h) = self.resolution;
        if w == 0 || h == 0 {
            return Err(ConfigError::ZeroResolution {
                width: w,
                height: h,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::two_station_config;

    #[test]
    fn valid_config_passes() {
        assert!(two_station_config().validate().is_ok());
    }

    #[test]
    fn empty_stations_rejected() {
        let mut cfg = two_station_config();
        cfg.stations.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyStations)));
    }

    #[test]
    fn empty_path_rejected() {
        let mut cfg = two_station_config();
        cfg.conveyor_path.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyPath)));
    }

    #[test]
    fn non_positive_rates_rejected() {
        let mut cfg = two_station_config();
        cfg.item_rate = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "item_rate",
                ..
            })
        ));

        let mut cfg = two_station_config();
        cfg.steps_per_second = -0.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "steps_per_second",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_station_speed_rejected() {
        let mut cfg = two_station_config();
        cfg.stations[1].speed = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveSpeed { .. }));
        assert!(err.to_string().contains(&cfg.stations[1].name));
    }

    #[test]
    fn zero_area_resolution_rejected() {
        let mut cfg = two_station_config();
        cfg.resolution = (0, 600);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroResolution { .. })
        ));
    }
}
