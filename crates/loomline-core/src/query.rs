//! Read-only snapshot types for presentation consumers.
//!
//! All types are owned copies -- no references into internal engine
//! storage, so HUDs and renderers can hold them across ticks.

use crate::material::MaterialKind;
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// One token, as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSnapshot {
    pub position: Vec2,
    /// Vestigial; zeroed by the freeze check, never integrated.
    pub velocity: Vec2,
    pub kind: MaterialKind,
    /// Visual radius from the configuration, presentation-only.
    pub radius: f32,
}

/// The counters and labels the HUD displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// Name of the station of the most recent station transition.
    pub current_area: String,
    /// Most recently derived dwell time in seconds.
    pub time_per_step: f64,
    /// Live non-terminal tokens.
    pub object_count: u32,
    /// Tokens that reached the terminal kind.
    pub completed_count: u32,
    pub auto_move: bool,
    pub spawn_enabled: bool,
}
