// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walking-line helpers.

use nalgebra::Vector2;

use crate::point::Point2D;

/// Total length of an open polyline
pub fn polyline_length(points: &[Point2D]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Arrow head drawn at the end of a walking line.
///
/// The cap is three extra points (left barb, right barb, tip) so a renderer
/// drawing one continuous line ends with a "▷" shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowCap {
    /// Distance from the tip back to the barb base
    pub length: f64,
    /// Barb offset on each side of the line
    pub half_width: f64,
}

impl Default for ArrowCap {
    fn default() -> Self {
        Self {
            length: 0.5,
            half_width: 0.25,
        }
    }
}

impl ArrowCap {
    /// Append the cap to `path`.
    ///
    /// Returns `false` (leaving the path untouched) when the path has fewer
    /// than two points or its last segment has zero length.
    pub fn append_to(&self, path: &mut Vec<Point2D>) -> bool {
        let n = path.len();
        if n < 2 {
            return false;
        }
        let tip = path[n - 1];
        let prev = path[n - 2];

        let direction: Vector2<f64> = prev.vector_to(&tip);
        let len = direction.norm();
        if len < 1e-12 {
            return false;
        }
        let direction = direction / len;

        let base = tip.to_nalgebra() - direction * self.length;
        let normal = Vector2::new(-direction.y, direction.x) * self.half_width;

        path.push(Point2D::from_nalgebra(&(base + normal)));
        path.push(Point2D::from_nalgebra(&(base - normal)));
        path.push(tip);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_sums_segments() {
        let pts = [
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(3.0, 10.0),
        ];
        assert_relative_eq!(polyline_length(&pts), 11.0);
        assert_eq!(polyline_length(&pts[..1]), 0.0);
    }

    #[test]
    fn arrow_cap_points_back_from_tip() {
        let mut path = vec![Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0)];
        assert!(ArrowCap::default().append_to(&mut path));

        assert_eq!(path.len(), 5);
        assert_relative_eq!(path[2].x, 1.5);
        assert_relative_eq!(path[2].y, 0.25);
        assert_relative_eq!(path[3].x, 1.5);
        assert_relative_eq!(path[3].y, -0.25);
        assert_eq!(path[4], Point2D::new(2.0, 0.0));
    }

    #[test]
    fn arrow_cap_skips_degenerate_tail() {
        let mut single = vec![Point2D::new(1.0, 1.0)];
        assert!(!ArrowCap::default().append_to(&mut single));
        assert_eq!(single.len(), 1);

        let mut repeated = vec![Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0)];
        assert!(!ArrowCap::default().append_to(&mut repeated));
        assert_eq!(repeated.len(), 2);
    }
}
