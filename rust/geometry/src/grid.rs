// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room rasterization and wall-clearance distance field.
//!
//! A [`RoomGrid`] covers the room's bounding box with square cells. A cell is
//! walkable when its center lies inside the room outline. The raster carries
//! one extra ring of cells around the bounding box; their centers are always
//! outside the outline, so the bounding-box boundary acts as a wall even for
//! rooms that fill their box completely (rectangles). The cell lattice is the
//! same as rasterizing the bare bounding box: cell centers sit at
//! `min + (i + 0.5) * cell_size`.
//!
//! The clearance field stores, for every cell, the distance to the nearest
//! non-walkable cell in map units. It is computed by a multi-source
//! breadth-first sweep seeded from every non-walkable cell, where axis steps
//! weigh `cell_size` and diagonal steps `cell_size * √2`. Each cell keeps the
//! value assigned on its first visit.

use std::collections::VecDeque;

use nalgebra::DMatrix;

use crate::bounds::Bounds2D;
use crate::error::{Error, Result};
use crate::point::Point2D;
use crate::polygon::point_in_polygon;

/// Upper bound on raster size (about 32 MB of bookkeeping per search).
pub const MAX_GRID_CELLS: usize = 4_000_000;

/// 8-connected neighbor offsets, axis moves first.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Integer cell coordinate inside a [`RoomGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
}

impl GridCell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in cell units.
    pub fn distance_to(&self, other: &GridCell) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` is reached by a diagonal move.
    pub fn is_diagonal_to(&self, other: &GridCell) -> bool {
        self.x != other.x && self.y != other.y
    }
}

/// Rasterized room with walkability and clearance per cell.
#[derive(Debug, Clone)]
pub struct RoomGrid {
    /// World position of the lower-left corner of cell (0, 0)
    origin: Point2D,
    cell_size: f64,
    /// Indexed `[(x, y)]`
    walkable: DMatrix<bool>,
    /// Distance to the nearest non-walkable cell, indexed `[(x, y)]`
    clearance: DMatrix<f64>,
}

impl RoomGrid {
    /// Rasterize a room outline into cells of `cell_size` map units.
    pub fn from_polygon(polygon: &[Point2D], cell_size: f64) -> Result<Self> {
        if polygon.len() < 3 {
            return Err(Error::DegeneratePolygon(polygon.len()));
        }
        if !polygon.iter().all(Point2D::is_finite) {
            return Err(Error::NonFiniteCoordinate);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(Error::InvalidCellSize(cell_size));
        }

        let bounds = Bounds2D::from_points(polygon).ok_or(Error::DegeneratePolygon(0))?;
        let inner_width = ((bounds.width() / cell_size).ceil() as usize).max(1);
        let inner_height = ((bounds.height() / cell_size).ceil() as usize).max(1);
        // One ring of outside cells on each side
        let width = inner_width.saturating_add(2);
        let height = inner_height.saturating_add(2);
        if width.saturating_mul(height) > MAX_GRID_CELLS {
            return Err(Error::GridTooLarge {
                width,
                height,
                max: MAX_GRID_CELLS,
            });
        }

        let origin = Point2D::new(bounds.min.x - cell_size, bounds.min.y - cell_size);
        let center = |x: usize, y: usize| {
            Point2D::new(
                origin.x + (x as f64 + 0.5) * cell_size,
                origin.y + (y as f64 + 0.5) * cell_size,
            )
        };

        let walkable = DMatrix::from_fn(width, height, |x, y| {
            let ring = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            !ring && point_in_polygon(center(x, y), polygon)
        });
        let clearance = compute_clearance(&walkable, cell_size);

        Ok(Self {
            origin,
            cell_size,
            walkable,
            clearance,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn width(&self) -> usize {
        self.walkable.nrows()
    }

    pub fn height(&self) -> usize {
        self.walkable.ncols()
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.contains(cell) && self.walkable[(cell.x, cell.y)]
    }

    /// Distance from the cell to the nearest wall, in map units.
    ///
    /// Infinite when the raster has no wall reachable from the cell.
    pub fn clearance(&self, cell: GridCell) -> f64 {
        if self.contains(cell) {
            self.clearance[(cell.x, cell.y)]
        } else {
            0.0
        }
    }

    /// Clearance of the cell containing `point` (clamped into the room box).
    pub fn clearance_at(&self, point: Point2D) -> f64 {
        self.clearance(self.cell_at(point))
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x < self.width() && cell.y < self.height()
    }

    // =========================================================================
    // Coordinate conversion
    // =========================================================================

    /// Row-major linear index, for per-cell search bookkeeping.
    pub fn index(&self, cell: GridCell) -> usize {
        cell.y * self.width() + cell.x
    }

    pub fn cell_from_index(&self, index: usize) -> GridCell {
        GridCell::new(index % self.width(), index / self.width())
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell: GridCell) -> Point2D {
        Point2D::new(
            self.origin.x + (cell.x as f64 + 0.5) * self.cell_size,
            self.origin.y + (cell.y as f64 + 0.5) * self.cell_size,
        )
    }

    /// Cell containing `point`, clamped into the room's bounding-box cells.
    pub fn cell_at(&self, point: Point2D) -> GridCell {
        let fx = ((point.x - self.origin.x) / self.cell_size).floor();
        let fy = ((point.y - self.origin.y) / self.cell_size).floor();
        // Float-to-int casts saturate, NaN maps to 0
        let x = (fx as isize).clamp(1, self.width() as isize - 2);
        let y = (fy as isize).clamp(1, self.height() as isize - 2);
        GridCell::new(x as usize, y as usize)
    }

    /// Neighbor at the given offset, if it lies inside the raster.
    pub fn neighbor(&self, cell: GridCell, dx: isize, dy: isize) -> Option<GridCell> {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let n = GridCell::new(x, y);
        self.contains(n).then_some(n)
    }

    // =========================================================================
    // Snapping
    // =========================================================================

    /// The cell itself when walkable, otherwise the first walkable cell found
    /// by a breadth-first search outward from it.
    pub fn nearest_walkable(&self, from: GridCell) -> Option<GridCell> {
        if !self.contains(from) {
            return None;
        }
        if self.is_walkable(from) {
            return Some(from);
        }

        let mut seen = DMatrix::from_element(self.width(), self.height(), false);
        let mut queue = VecDeque::new();
        seen[(from.x, from.y)] = true;
        queue.push_back(from);

        while let Some(cell) = queue.pop_front() {
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let Some(n) = self.neighbor(cell, dx, dy) else {
                    continue;
                };
                if seen[(n.x, n.y)] {
                    continue;
                }
                if self.walkable[(n.x, n.y)] {
                    return Some(n);
                }
                seen[(n.x, n.y)] = true;
                queue.push_back(n);
            }
        }

        None
    }

    /// Snap a world point to the nearest walkable cell.
    pub fn snap(&self, point: Point2D) -> Option<GridCell> {
        self.nearest_walkable(self.cell_at(point))
    }
}

/// Multi-source breadth-first distance to the nearest non-walkable cell.
fn compute_clearance(walkable: &DMatrix<bool>, cell_size: f64) -> DMatrix<f64> {
    let (w, h) = walkable.shape();
    let mut dist = DMatrix::from_element(w, h, f64::INFINITY);
    let mut visited = DMatrix::from_element(w, h, false);
    let mut queue = VecDeque::new();

    // Seeds in x-major order
    for x in 0..w {
        for y in 0..h {
            if !walkable[(x, y)] {
                dist[(x, y)] = 0.0;
                visited[(x, y)] = true;
                queue.push_back((x, y));
            }
        }
    }

    let diagonal = cell_size * std::f64::consts::SQRT_2;
    while let Some((x, y)) = queue.pop_front() {
        let current = dist[(x, y)];
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if nx >= w || ny >= h || visited[(nx, ny)] {
                continue;
            }
            let step = if dx != 0 && dy != 0 { diagonal } else { cell_size };
            dist[(nx, ny)] = current + step;
            visited[(nx, ny)] = true;
            queue.push_back((nx, ny));
        }
    }

    dist
}
