// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walking lines for every leg of a route.
//!
//! Each step is refined independently by a room search from its origin to
//! its target, so legs are processed in parallel.

use indoor_nav_core::{Campus, Point2D};
use indoor_nav_geometry::ArrowCap;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::RoomSearchConfig;
use crate::room::RoomPathfinder;
use crate::route::{Route, Step};

/// Options for [`refine_route`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RefineOptions {
    pub search: RoomSearchConfig,
    /// Arrow head appended to each walking line, if any
    pub arrow: Option<ArrowCap>,
}

/// Walking line of one step; `path` is `None` when the room search failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedLeg {
    pub step: usize,
    pub path: Option<Vec<Point2D>>,
}

impl RefinedLeg {
    pub fn is_resolved(&self) -> bool {
        self.path.is_some()
    }
}

/// Run the room search for every step, in step order.
pub fn refine_route(campus: &Campus, route: &Route, options: &RefineOptions) -> Vec<RefinedLeg> {
    route
        .steps()
        .par_iter()
        .enumerate()
        .map(|(i, step)| RefinedLeg {
            step: i,
            path: refine_step(campus, step, options),
        })
        .collect()
}

/// Walking line for a single step.
///
/// The first and last cell centers are replaced by the step's exact origin
/// and target so consecutive legs join at the intersections.
pub fn refine_step(campus: &Campus, step: &Step, options: &RefineOptions) -> Option<Vec<Point2D>> {
    let room = campus.room(step.room)?;
    let finder = match RoomPathfinder::new(&room.points, options.search) {
        Ok(finder) => finder,
        Err(err) => {
            tracing::warn!(room = %room.id, %err, "cannot rasterize room");
            return None;
        }
    };

    let mut path = match finder.try_find_path(step.origin, step.target) {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(room = %room.id, %err, "no walking line through room");
            return None;
        }
    };

    if let Some(first) = path.first_mut() {
        *first = step.origin;
    }
    if let Some(last) = path.last_mut() {
        *last = step.target;
    }
    if let Some(arrow) = options.arrow {
        arrow.append_to(&mut path);
    }
    Some(path)
}
