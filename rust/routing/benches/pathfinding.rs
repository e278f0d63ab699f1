// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for the building-level and room-level searches.
//!
//! Run with: cargo bench -p indoor-nav-routing --bench pathfinding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indoor_nav_core::{Campus, Floor, Point2D, Room, RoomIntersection};
use indoor_nav_routing::{BuildingPathfinder, RoomPathfinder, RoomSearchConfig, TransitionMode};

fn square(x: f64, y: f64, size: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(x, y),
        Point2D::new(x + size, y),
        Point2D::new(x + size, y + size),
        Point2D::new(x, y + size),
    ]
}

/// One floor of `n` x `n` rooms with doors to the right and upper neighbors.
fn grid_campus(n: usize) -> Campus {
    let mut rooms = Vec::with_capacity(n * n);
    let mut doors = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as f64 * 6.0, j as f64 * 6.0);
            rooms.push(Room {
                id: format!("r{i}-{j}"),
                name: format!("Room {i}/{j}"),
                points: square(x, y, 6.0),
                code: None,
                notes: None,
            });
            if i + 1 < n {
                doors.push(RoomIntersection {
                    id: format!("h{i}-{j}"),
                    room_id1: format!("r{i}-{j}"),
                    room_id2: format!("r{}-{j}", i + 1),
                    intersection: Point2D::new(x + 6.0, y + 3.0),
                });
            }
            if j + 1 < n {
                doors.push(RoomIntersection {
                    id: format!("v{i}-{j}"),
                    room_id1: format!("r{i}-{j}"),
                    room_id2: format!("r{i}-{}", j + 1),
                    intersection: Point2D::new(x + 3.0, y + 6.0),
                });
            }
        }
    }
    Campus::new(vec![Floor {
        id: "grid".into(),
        name: "Grid".into(),
        rooms,
        intersections: doors,
        floor_intersections: Vec::new(),
        version: 1,
        height: 3.0,
        altitude: 0.0,
        scale: 1.0,
        enabled: true,
    }])
}

fn bench_building_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("building_search");
    for n in [5usize, 10, 20] {
        let campus = grid_campus(n);
        let origin = campus.room_key("r0-0").unwrap();
        let target = campus.room_key(&format!("r{}-{}", n - 1, n - 1)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &campus, |b, campus| {
            let finder = BuildingPathfinder::new(campus);
            b.iter(|| finder.find_route(black_box(origin), black_box(target), TransitionMode::Stairs))
        });
    }
    group.finish();
}

fn bench_room_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_search");
    for size in [10.0, 25.0, 50.0] {
        let outline = square(0.0, 0.0, size);
        let finder = RoomPathfinder::new(&outline, RoomSearchConfig::default()).unwrap();
        let start = Point2D::new(0.5, 0.5);
        let end = Point2D::new(size - 0.5, size - 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &finder, |b, finder| {
            b.iter(|| finder.find_path(black_box(start), black_box(end)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_building_search, bench_room_search);
criterion_main!(benches);
