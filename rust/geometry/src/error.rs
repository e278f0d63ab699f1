// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry operations.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing room geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A room outline needs at least three points to enclose any area.
    #[error("degenerate polygon: {0} point(s), at least 3 are required")]
    DegeneratePolygon(usize),

    #[error("polygon contains a non-finite coordinate")]
    NonFiniteCoordinate,

    #[error("invalid cell size: {0}")]
    InvalidCellSize(f64),

    #[error("grid of {width}x{height} cells exceeds the limit of {max} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
}
