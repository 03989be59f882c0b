//! The lane enemies walk and the placement grid derived from it.
//!
//! A `Path` is immutable once built. The `PlacementGrid` marks every cell
//! that coincides with a waypoint and is recomputed only from the path.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::GRID_SIZE;
use crate::error::PathError;
use crate::types::GridCell;

/// Waypoints of the built-in lane, spawn first, base last.
const DEFAULT_LANE: [(i32, i32); 15] = [
    (14, 7),
    (13, 7),
    (12, 7),
    (11, 6),
    (10, 5),
    (9, 4),
    (8, 4),
    (7, 5),
    (6, 6),
    (5, 7),
    (4, 7),
    (3, 7),
    (2, 7),
    (1, 7),
    (0, 7),
];

/// Ordered waypoints from the spawn point to the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<GridCell>,
}

impl Path {
    /// Build a lane. Needs at least two in-bounds waypoints with no
    /// consecutive repeats.
    ///
    /// Enemies walk each segment in a straight line between cell centers,
    /// so waypoints need not be grid neighbours: a diagonal or multi-cell
    /// jump is a straight cut. The placement grid marks only the waypoint
    /// cells themselves as lane.
    pub fn new(waypoints: Vec<GridCell>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooShort {
                len: waypoints.len(),
            });
        }
        if let Some(cell) = waypoints.iter().find(|c| !c.in_bounds()) {
            return Err(PathError::OutOfBounds { cell: *cell });
        }
        if let Some(index) = waypoints.windows(2).position(|w| w[0] == w[1]) {
            return Err(PathError::RepeatedWaypoint {
                index: index + 1,
                cell: waypoints[index],
            });
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[GridCell] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint (the base).
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// World-space center of waypoint `index`, if it exists.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.waypoints.get(index).map(GridCell::center)
    }

    /// Where enemies appear.
    pub fn spawn_point(&self) -> Vec2 {
        self.waypoints[0].center()
    }

    /// The cell the base occupies.
    pub fn base_cell(&self) -> GridCell {
        self.waypoints[self.last_index()]
    }

    /// Derive the placement grid for this lane.
    pub fn placement_grid(&self) -> PlacementGrid {
        PlacementGrid::from_path(self)
    }
}

impl Default for Path {
    fn default() -> Self {
        Self {
            waypoints: DEFAULT_LANE
                .iter()
                .map(|&(x, y)| GridCell::new(x, y))
                .collect(),
        }
    }
}

/// Board-sized mask of cells that belong to the lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    path_cells: Vec<bool>,
}

impl PlacementGrid {
    pub fn from_path(path: &Path) -> Self {
        let side = GRID_SIZE as usize;
        let mut path_cells = vec![false; side * side];
        for cell in path.waypoints() {
            path_cells[Self::index(*cell)] = true;
        }
        Self { path_cells }
    }

    /// Whether `cell` is part of the lane. Out-of-bounds cells are not.
    pub fn is_path(&self, cell: GridCell) -> bool {
        cell.in_bounds() && self.path_cells[Self::index(cell)]
    }

    fn index(cell: GridCell) -> usize {
        cell.y as usize * GRID_SIZE as usize + cell.x as usize
    }
}
