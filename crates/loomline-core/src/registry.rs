//! The material registry: the live token collection and throughput counters.
//!
//! Owns every token as a plain value in a `Vec` -- spawning appends,
//! promotion mutates in place, reset clears. `object_count` counts live
//! in-transit tokens; `completed_count` counts tokens that reached the
//! terminal kind. Their sum equals the total number ever spawned (the
//! conservation invariant), because promoted tokens stay in the collection
//! but swap which counter they belong to.

use crate::material::{Material, MaterialKind};
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Live token collection plus aggregate counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    object_count: u32,
    completed_count: u32,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new token at `position` with the given kind and append
    /// it to the live collection.
    ///
    /// The kind is not constrained beyond membership in the closed set;
    /// [`MaterialKind::Other`] is accepted as a documented pass-through.
    pub fn spawn(&mut self, now: f64, position: Vec2, kind: MaterialKind) {
        self.materials.push(Material::new(now, position, kind));
        self.object_count += 1;
    }

    /// Promote the token at `index` to the terminal kind.
    ///
    /// Called only when a token's station index reaches the terminal index.
    /// The token's kind becomes [`MaterialKind::Finished`], its position
    /// snaps to the completed-area coordinate, and it moves from in-transit
    /// accounting to the completed counter. The token itself stays in the
    /// collection so renderers can keep drawing it.
    pub fn promote_to_terminal(&mut self, index: usize, terminal_pos: Vec2) {
        let m = &mut self.materials[index];
        if m.kind.is_terminal() {
            return;
        }
        m.kind = MaterialKind::Finished;
        m.position = terminal_pos;
        m.velocity = Vec2::ZERO;
        m.progress = 0.0;
        self.object_count = self.object_count.saturating_sub(1);
        self.completed_count += 1;
    }

    /// Clear all tokens and zero both counters. Idempotent.
    pub fn reset(&mut self) {
        self.materials.clear();
        self.object_count = 0;
        self.completed_count = 0;
    }

    /// All tokens, terminal ones included, in spawn order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Mutable token access for the transport engine's per-tick pass.
    #[cfg(not(any(test, feature = "test-utils")))]
    pub(crate) fn materials_mut(&mut self) -> &mut [Material] {
        &mut self.materials
    }

    /// Mutable token access for the transport engine's per-tick pass.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn materials_mut(&mut self) -> &mut [Material] {
        &mut self.materials
    }

    /// Number of live non-terminal tokens.
    pub fn object_count(&self) -> u32 {
        self.object_count
    }

    /// Number of tokens that reached the terminal kind.
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Total tokens in the collection (live + finished).
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
