// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-level grid searches on simple outlines.

use indoor_nav_geometry::{point_in_polygon, polyline_length, Point2D};
use indoor_nav_routing::{find_room_path, RoomPathfinder, RoomSearchConfig, RouteError};

fn rect(w: f64, h: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(w, 0.0),
        Point2D::new(w, h),
        Point2D::new(0.0, h),
    ]
}

/// 6 x 6 L with the inner corner at (2, 2).
fn l_shape() -> Vec<Point2D> {
    vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(6.0, 0.0),
        Point2D::new(6.0, 2.0),
        Point2D::new(2.0, 2.0),
        Point2D::new(2.0, 6.0),
        Point2D::new(0.0, 6.0),
    ]
}

fn unit_cells() -> RoomSearchConfig {
    RoomSearchConfig::default().with_cell_size(1.0)
}

#[test]
fn convex_room_path_is_nearly_straight() {
    let config = unit_cells().with_penalty_factor(0.0);
    let start = Point2D::new(1.5, 1.5);
    let end = Point2D::new(10.5, 4.5);
    let path = find_room_path(&rect(12.0, 6.0), start, end, &config).unwrap();

    let straight = start.distance_to(&end);
    let walked = polyline_length(&path);
    assert!(walked >= straight - 1e-9);
    assert!(walked - straight <= std::f64::consts::SQRT_2);
}

#[test]
fn penalty_keeps_the_path_off_the_wall() {
    let room = rect(12.0, 6.0);
    let start = Point2D::new(1.5, 0.5);
    let end = Point2D::new(11.5, 0.5);

    let clearances = |penalty: f64| {
        let finder = RoomPathfinder::new(&room, unit_cells().with_penalty_factor(penalty)).unwrap();
        let path = finder.find_path(start, end).unwrap();
        path.iter()
            .map(|p| finder.grid().clearance_at(*p))
            .collect::<Vec<f64>>()
    };

    let hugging = clearances(0.0);
    let avoiding = clearances(1.0);

    let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
    let sum = |v: &[f64]| v.iter().sum::<f64>();
    assert!(min(&avoiding[..]) >= min(&hugging[..]));
    assert!(sum(&avoiding[..]) / avoiding.len() as f64 > sum(&hugging[..]) / hugging.len() as f64);
}

#[test]
fn higher_penalties_never_lower_min_clearance() {
    let room = rect(12.0, 6.0);
    let start = Point2D::new(1.5, 0.5);
    let end = Point2D::new(11.5, 0.5);

    let mut previous = 0.0;
    for penalty in [0.0, 0.5, 1.0, 4.0] {
        let finder = RoomPathfinder::new(&room, unit_cells().with_penalty_factor(penalty)).unwrap();
        let path = finder.find_path(start, end).unwrap();
        let min = path
            .iter()
            .map(|p| finder.grid().clearance_at(*p))
            .fold(f64::INFINITY, f64::min);
        assert!(min >= previous, "penalty {penalty}: {min} < {previous}");
        previous = min;
    }
}

#[test]
fn l_shaped_room_goes_around_the_corner() {
    let room = l_shape();
    let path = find_room_path(
        &room,
        Point2D::new(5.5, 0.5),
        Point2D::new(0.5, 5.5),
        &unit_cells(),
    )
    .unwrap();

    assert!(path.iter().all(|p| point_in_polygon(*p, &room)));
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.x != b.x && a.y != b.y {
            // Both cells beside a diagonal move are inside the room
            assert!(point_in_polygon(Point2D::new(b.x, a.y), &room));
            assert!(point_in_polygon(Point2D::new(a.x, b.y), &room));
        }
    }
    assert!(!path.contains(&Point2D::new(2.5, 2.5)));
}

#[test]
fn same_cell_gives_two_point_path() {
    let start = Point2D::new(3.1, 3.2);
    let end = Point2D::new(3.8, 3.9);
    let path = find_room_path(&rect(6.0, 6.0), start, end, &unit_cells()).unwrap();
    assert_eq!(path, vec![start, end]);
}

#[test]
fn narrow_neck_disconnects_the_room() {
    // Two 4 x 4 halves joined by a 0.4 m corridor, narrower than one cell
    let room = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(4.0, 0.0),
        Point2D::new(4.0, 1.8),
        Point2D::new(6.0, 1.8),
        Point2D::new(6.0, 0.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(10.0, 4.0),
        Point2D::new(6.0, 4.0),
        Point2D::new(6.0, 2.2),
        Point2D::new(4.0, 2.2),
        Point2D::new(4.0, 4.0),
        Point2D::new(0.0, 4.0),
    ];
    let finder = RoomPathfinder::new(&room, unit_cells()).unwrap();
    assert_eq!(
        finder.try_find_path(Point2D::new(1.5, 1.5), Point2D::new(8.5, 1.5)),
        Err(RouteError::NoPathFound)
    );
    assert!(finder
        .find_path(Point2D::new(1.5, 1.5), Point2D::new(8.5, 1.5))
        .is_none());
}

#[test]
fn finder_answers_many_queries() {
    let finder = RoomPathfinder::new(&rect(8.0, 8.0), RoomSearchConfig::default()).unwrap();
    let corners = [
        Point2D::new(0.5, 0.5),
        Point2D::new(7.5, 0.5),
        Point2D::new(7.5, 7.5),
        Point2D::new(0.5, 7.5),
    ];
    for a in corners {
        for b in corners {
            let path = finder.find_path(a, b).unwrap();
            assert!(path.len() >= 2);
        }
    }
}
