// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walking line through a single room.
//!
//! The room outline is rasterized once into a [`RoomGrid`]; each query then
//! runs an 8-connected A* over the walkable cells. Moving into a cell costs
//! the move length in cell units (1 or √2) plus a clearance penalty that
//! grows as the cell gets closer to a wall, so paths keep away from walls
//! where the room is wide enough. Diagonal moves that would clip a
//! non-walkable corner are rejected.

use indoor_nav_geometry::{GridCell, Point2D, RoomGrid, NEIGHBOR_OFFSETS};
use tracing::debug;

use crate::config::RoomSearchConfig;
use crate::error::{Result, RouteError};
use crate::queue::PriorityQueue;

/// Open-list entry; equal when it refers to the same cell.
#[derive(Debug, Clone, Copy)]
struct OpenCell {
    index: usize,
    f: f64,
}

impl PartialEq for OpenCell {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Precomputed grid search for one room.
#[derive(Debug, Clone)]
pub struct RoomPathfinder {
    grid: RoomGrid,
    config: RoomSearchConfig,
}

impl RoomPathfinder {
    /// Rasterize `polygon` with the configured cell size.
    pub fn new(polygon: &[Point2D], config: RoomSearchConfig) -> Result<Self> {
        let grid = RoomGrid::from_polygon(polygon, config.cell_size)?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            walkable = grid.walkable_count(),
            "rasterized room"
        );
        Ok(Self { grid, config })
    }

    pub fn grid(&self) -> &RoomGrid {
        &self.grid
    }

    pub fn config(&self) -> &RoomSearchConfig {
        &self.config
    }

    /// Cell-center polyline from `start` to `end`, or `None`.
    pub fn find_path(&self, start: Point2D, end: Point2D) -> Option<Vec<Point2D>> {
        match self.try_find_path(start, end) {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(%err, "room search failed");
                None
            }
        }
    }

    /// Like [`find_path`](Self::find_path), reporting why no path exists.
    ///
    /// When both points snap to the same cell the result is `[start, end]`.
    pub fn try_find_path(&self, start: Point2D, end: Point2D) -> Result<Vec<Point2D>> {
        let from = self.grid.snap(start).ok_or(RouteError::NoPathFound)?;
        let to = self.grid.snap(end).ok_or(RouteError::NoPathFound)?;
        if from == to {
            return Ok(vec![start, end]);
        }

        let cells = self.search(from, to)?;
        Ok(cells.into_iter().map(|c| self.grid.cell_center(c)).collect())
    }

    fn search(&self, from: GridCell, to: GridCell) -> Result<Vec<GridCell>> {
        let grid = &self.grid;
        let n = grid.cell_count();
        let goal = grid.index(to);

        let mut g = vec![f64::INFINITY; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut open = PriorityQueue::new(|c: &OpenCell| c.f);

        let start = grid.index(from);
        g[start] = 0.0;
        open.push(OpenCell {
            index: start,
            f: from.distance_to(&to),
        });

        let mut expansions = 0usize;
        while let Some(OpenCell { index, .. }) = open.pop() {
            if index == goal {
                debug!(expansions, cost = g[goal], "room path found");
                return Ok(reconstruct(grid, &parent, goal));
            }
            if closed[index] {
                continue;
            }
            closed[index] = true;

            expansions += 1;
            if expansions > self.config.max_expansions {
                return Err(RouteError::SafetyCapExceeded { expansions });
            }

            let cell = grid.cell_from_index(index);
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let Some(next) = grid.neighbor(cell, dx, dy) else {
                    continue;
                };
                let ni = grid.index(next);
                if closed[ni] || !grid.is_walkable(next) {
                    continue;
                }
                let diagonal = dx != 0 && dy != 0;
                if diagonal && !self.can_cut_corner(cell, dx, dy) {
                    continue;
                }

                let step = if diagonal { std::f64::consts::SQRT_2 } else { 1.0 };
                let tentative = g[index] + step + self.config.clearance_penalty(grid.clearance(next));
                if tentative < g[ni] {
                    g[ni] = tentative;
                    parent[ni] = Some(index);
                    let entry = OpenCell {
                        index: ni,
                        f: tentative + next.distance_to(&to),
                    };
                    if !open.update_priority(entry) {
                        open.push(entry);
                    }
                }
            }
        }

        Err(RouteError::NoPathFound)
    }

    /// Both axis-adjacent cells of a diagonal move must be walkable.
    fn can_cut_corner(&self, cell: GridCell, dx: isize, dy: isize) -> bool {
        let walkable = |dx, dy| {
            self.grid
                .neighbor(cell, dx, dy)
                .is_some_and(|c| self.grid.is_walkable(c))
        };
        walkable(dx, 0) && walkable(0, dy)
    }
}

fn reconstruct(grid: &RoomGrid, parent: &[Option<usize>], goal: usize) -> Vec<GridCell> {
    let mut path = vec![grid.cell_from_index(goal)];
    let mut current = goal;
    while let Some(p) = parent[current] {
        path.push(grid.cell_from_index(p));
        current = p;
    }
    path.reverse();
    path
}

/// One-shot room search with a fresh raster.
pub fn find_room_path(
    polygon: &[Point2D],
    start: Point2D,
    end: Point2D,
    config: &RoomSearchConfig,
) -> Option<Vec<Point2D>> {
    RoomPathfinder::new(polygon, *config).ok()?.find_path(start, end)
}
