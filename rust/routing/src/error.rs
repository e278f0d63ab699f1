// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for route planning.

/// Result type alias for route planning.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Reasons a query produced no route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The open list ran dry before reaching the target.
    #[error("no path found")]
    NoPathFound,

    /// The search gave up after the configured number of expansions.
    #[error("search aborted after {expansions} expansions")]
    SafetyCapExceeded { expansions: usize },

    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// The room outline cannot be rasterized.
    #[error("room geometry error: {0}")]
    Geometry(#[from] indoor_nav_geometry::Error),
}
