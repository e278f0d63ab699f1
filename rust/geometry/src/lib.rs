// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Indoor-Nav Geometry
//!
//! Planar geometry used by the indoor route planner:
//!
//! - **Points and bounds**: [`Point2D`] (serializable map coordinate) and
//!   [`Bounds2D`] (axis-aligned bounding box).
//! - **Polygon queries**: even-odd point-in-polygon test and bounding-box
//!   center of a room outline.
//! - **Room rasterization**: [`RoomGrid`] turns a room polygon into square
//!   walkable/non-walkable cells and a wall-clearance distance field.
//! - **Polylines**: length and the arrow cap appended to a walking line.
//!
//! All coordinates are in map units (one unit per meter).

pub mod bounds;
pub mod error;
pub mod grid;
pub mod point;
pub mod polygon;
pub mod polyline;

// Re-export nalgebra types for convenience
pub use nalgebra::{DMatrix, Vector2};

pub use bounds::Bounds2D;
pub use error::{Error, Result};
pub use grid::{GridCell, RoomGrid, NEIGHBOR_OFFSETS};
pub use point::Point2D;
pub use polygon::{point_in_polygon, polygon_center};
pub use polyline::{polyline_length, ArrowCap};
