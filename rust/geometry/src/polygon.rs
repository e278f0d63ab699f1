// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon queries on room outlines.
//!
//! Outlines are ordered point lists, closed implicitly (the last point
//! connects back to the first). Winding order does not matter.

use crate::bounds::Bounds2D;
use crate::point::Point2D;

/// Even-odd ray casting point-in-polygon test.
///
/// Casts a horizontal ray towards +x and counts edge crossings. Points
/// exactly on an edge may fall on either side.
pub fn point_in_polygon(p: Point2D, polygon: &[Point2D]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        // The straddle check guarantees pi.y != pj.y, so the division is safe
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Center of the polygon's bounding box.
///
/// This is the "room center" used for route endpoints. An empty outline
/// yields the origin.
pub fn polygon_center(polygon: &[Point2D]) -> Point2D {
    Bounds2D::from_points(polygon)
        .map(|b| b.center())
        .unwrap_or_default()
}
