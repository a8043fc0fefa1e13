//! The material token: a unit traveling through the factory.
//!
//! Tokens are plain value records owned by the registry's vector -- no
//! handles, no foreign memory. The `velocity` field is never integrated by
//! the engine; it exists for renderer/physics-backend compatibility and is
//! only ever written by the freeze check.

use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// The closed set of material kinds, tagged with the three-letter labels
/// the renderers draw.
///
/// `Other` is the documented pass-through for unknown tags in data files:
/// accepted, never an error, rendered in the default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Raw cotton entering at the entrance.
    #[serde(rename = "Cot")]
    Cotton,
    /// Raw fabric entering at the entrance.
    #[serde(rename = "Fab")]
    Fabric,
    /// The terminal kind: a finished good. Absorbing -- assigned exactly
    /// once, when a token reaches the last station.
    #[serde(rename = "Fin")]
    Finished,
    /// Any tag outside the known set.
    #[serde(other)]
    Other,
}

impl MaterialKind {
    /// The short label renderers draw on the token.
    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Cotton => "Cot",
            MaterialKind::Fabric => "Fab",
            MaterialKind::Finished => "Fin",
            MaterialKind::Other => "???",
        }
    }

    /// Whether this is the absorbing terminal kind.
    pub fn is_terminal(self) -> bool {
        matches!(self, MaterialKind::Finished)
    }
}

/// A material token in transit (or at rest in the completed area).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Position on the factory floor.
    pub position: Vec2,
    /// Vestigial velocity. Unused by engine logic; consumed only by
    /// physics-backed renderers and zeroed by the freeze check.
    pub velocity: Vec2,
    /// Type tag. Becomes [`MaterialKind::Finished`] exactly once.
    pub kind: MaterialKind,
    /// Current station index, 0-based into the station sequence.
    pub station: usize,
    /// Creation timestamp, seconds.
    pub created_at: f64,
    /// Timestamp of the last station transition, seconds. Dwell-time
    /// eligibility is measured against this.
    pub last_transition: f64,
    /// Path progress fraction within the current segment, in [0, 1).
    pub progress: f32,
    /// Index of the current conveyor path segment.
    pub segment: usize,
}

impl Material {
    /// A fresh token at the given position: progress 0, segment 0,
    /// station 0, both timestamps set to `now`.
    pub fn new(now: f64, position: Vec2, kind: MaterialKind) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            kind,
            station: 0,
            created_at: now,
            last_transition: now,
            progress: 0.0,
            segment: 0,
        }
    }

    /// Whether this token has reached the absorbing terminal state.
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Put the token back into the initial transit state at the entrance.
    /// Used by the engine's defensive invariant recovery.
    pub fn reset_to_entrance(&mut self, now: f64, entrance: Vec2) {
        self.position = entrance;
        self.velocity = Vec2::ZERO;
        self.station = 0;
        self.segment = 0;
        self.progress = 0.0;
        self.last_transition = now;
    }
}
