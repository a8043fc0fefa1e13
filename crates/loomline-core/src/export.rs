//! The state exporter: a lossy 0/1 occupancy projection of token positions.
//!
//! Each cell is 1 if any token's position, rounded to the *nearest* integer
//! (so (3.2, 7.9) lands in cell (3, 8)), falls in that cell. Multiple
//! tokens collapse to a single 1 and out-of-bounds positions are skipped.
//! The grid is presentation-only -- simulation logic never reads it.

use crate::material::Material;
use serde::{Deserialize, Serialize};

/// A discretized 0/1 matrix of token positions, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    /// An empty grid of the given resolution.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at (x, y): 0 or 1.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = 1;
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Rows from top (y = 0) to bottom, for line-by-line printing.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }
}

/// Project token positions into an occupancy grid of the given resolution.
pub fn occupancy_grid(materials: &[Material], width: usize, height: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height);
    for m in materials {
        let x = m.position.x.round();
        let y = m.position.y.round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as usize, y as usize);
        if x < width && y < height {
            grid.set(x, y);
        }
    }
    grid
}
