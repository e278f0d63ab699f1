// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The loaded map snapshot with id indices.
//!
//! A [`Campus`] owns every floor and never changes after construction, so
//! any number of queries may borrow it concurrently. Ids are resolved once
//! into [`FloorKey`] / [`RoomKey`] / [`IntersectionKey`] positions; when an
//! id repeats, the first occurrence in floor order wins.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::intersection::Intersection;
use crate::keys::{FloorKey, IntersectionKey, RoomKey};
use crate::model::{Floor, Room};

/// On-disk campus layout: `{"floors": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CampusData {
    floors: Vec<Floor>,
}

/// Immutable multi-floor map with O(1) id lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CampusData", into = "CampusData")]
pub struct Campus {
    floors: Vec<Floor>,
    floors_by_id: FxHashMap<String, FloorKey>,
    rooms_by_id: FxHashMap<String, RoomKey>,
    /// Per-floor room index, for references that must stay on one floor
    rooms_by_floor: Vec<FxHashMap<String, usize>>,
    floor_intersections_by_id: FxHashMap<String, IntersectionKey>,
}

impl From<CampusData> for Campus {
    fn from(data: CampusData) -> Self {
        Campus::new(data.floors)
    }
}

impl From<Campus> for CampusData {
    fn from(campus: Campus) -> Self {
        CampusData {
            floors: campus.floors,
        }
    }
}

impl Campus {
    /// Builds the id indices over `floors`.
    pub fn new(floors: Vec<Floor>) -> Self {
        let mut floors_by_id = FxHashMap::default();
        let mut rooms_by_id = FxHashMap::default();
        let mut rooms_by_floor = Vec::with_capacity(floors.len());
        let mut floor_intersections_by_id = FxHashMap::default();

        for (fi, floor) in floors.iter().enumerate() {
            let floor_key = FloorKey(fi);
            floors_by_id
                .entry(floor.id.clone())
                .and_modify(|_| warn!(floor = %floor.id, "duplicate floor id, keeping first"))
                .or_insert(floor_key);

            let mut local = FxHashMap::default();
            for (ri, room) in floor.rooms.iter().enumerate() {
                local.entry(room.id.clone()).or_insert(ri);
                rooms_by_id
                    .entry(room.id.clone())
                    .and_modify(|_| warn!(room = %room.id, "duplicate room id, keeping first"))
                    .or_insert(RoomKey::new(floor_key, ri));
            }
            rooms_by_floor.push(local);

            for (ii, intersection) in floor.floor_intersections.iter().enumerate() {
                floor_intersections_by_id
                    .entry(intersection.id.clone())
                    .and_modify(|_| {
                        warn!(
                            intersection = %intersection.id,
                            "duplicate floor intersection id, keeping first"
                        )
                    })
                    .or_insert(IntersectionKey::Floor {
                        floor: floor_key,
                        index: ii,
                    });
            }
        }

        Self {
            floors,
            floors_by_id,
            rooms_by_id,
            rooms_by_floor,
            floor_intersections_by_id,
        }
    }

    /// Parses a `{"floors": [...]}` campus document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses one document per floor, in the given order.
    pub fn from_floor_documents<'a>(documents: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let floors = documents
            .into_iter()
            .map(Floor::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(floors))
    }

    // =========================================================================
    // Floors
    // =========================================================================

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn floor(&self, key: FloorKey) -> Option<&Floor> {
        self.floors.get(key.0)
    }

    pub fn floor_key(&self, id: &str) -> Option<FloorKey> {
        self.floors_by_id.get(id).copied()
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    pub fn room(&self, key: RoomKey) -> Option<&Room> {
        self.floor(key.floor)?.rooms.get(key.index)
    }

    pub fn room_key(&self, id: &str) -> Option<RoomKey> {
        self.rooms_by_id.get(id).copied()
    }

    /// Room `id` on `floor` only; the first one wins if the floor repeats it.
    pub fn room_key_on(&self, floor: FloorKey, id: &str) -> Option<RoomKey> {
        let index = *self.rooms_by_floor.get(floor.0)?.get(id)?;
        Some(RoomKey::new(floor, index))
    }

    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }

    /// Every room with its key, in floor order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomKey, &Room)> + '_ {
        self.floors.iter().enumerate().flat_map(|(fi, floor)| {
            floor
                .rooms
                .iter()
                .enumerate()
                .map(move |(ri, room)| (RoomKey::new(FloorKey(fi), ri), room))
        })
    }

    /// Resolves free text such as `"Lab 2.14 east"` to a room.
    ///
    /// The first whitespace-separated token that contains a digit followed
    /// by a `.` is taken as the room code; the first room whose code contains
    /// that token is returned.
    pub fn find_room_by_partial_code(&self, text: &str) -> Option<RoomKey> {
        let code = text.split(' ').find(|part| looks_like_room_code(part))?;
        self.rooms()
            .find(|(_, room)| room.code.as_deref().is_some_and(|c| c.contains(code)))
            .map(|(key, _)| key)
    }

    // =========================================================================
    // Intersections
    // =========================================================================

    pub fn floor_intersection_key(&self, id: &str) -> Option<IntersectionKey> {
        self.floor_intersections_by_id.get(id).copied()
    }

    /// Resolves a key to the intersection it points at.
    pub fn intersection(&self, key: IntersectionKey) -> Option<Intersection<'_>> {
        match key {
            IntersectionKey::Room { floor, index } => self
                .floor(floor)?
                .intersections
                .get(index)
                .map(Intersection::Room),
            IntersectionKey::Floor { floor, index } => self
                .floor(floor)?
                .floor_intersections
                .get(index)
                .map(Intersection::Floor),
        }
    }
}

fn looks_like_room_code(part: &str) -> bool {
    part.as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{FloorIntersection, FloorIntersectionTarget, RoomIntersection};
    use indoor_nav_geometry::Point2D;

    fn square(x: f64, y: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(x, y),
            Point2D::new(x + 1.0, y),
            Point2D::new(x + 1.0, y + 1.0),
            Point2D::new(x, y + 1.0),
        ]
    }

    fn room(id: &str, code: Option<&str>) -> Room {
        Room {
            id: id.into(),
            name: id.to_uppercase(),
            points: square(0.0, 0.0),
            code: code.map(str::to_string),
            notes: None,
        }
    }

    fn floor(id: &str, rooms: Vec<Room>) -> Floor {
        Floor {
            id: id.into(),
            name: id.to_uppercase(),
            rooms,
            intersections: Vec::new(),
            floor_intersections: Vec::new(),
            version: 1,
            height: 3.0,
            altitude: 0.0,
            scale: 1.0,
            enabled: true,
        }
    }

    fn sample() -> Campus {
        let mut f1 = floor("f1", vec![room("a", Some("0.01")), room("b", Some("0.02"))]);
        f1.intersections.push(RoomIntersection {
            id: "ab".into(),
            room_id1: "a".into(),
            room_id2: "b".into(),
            intersection: Point2D::new(1.0, 0.5),
        });
        f1.floor_intersections.push(FloorIntersection {
            id: "s1".into(),
            intersection: Point2D::new(0.5, 0.5),
            is_elevator: false,
            origin_room_id: "b".into(),
            targets: vec![FloorIntersectionTarget {
                floor_id: "f2".into(),
                intersection_id: "s2".into(),
            }],
        });
        let f2 = floor("f2", vec![room("c", Some("1.01")), room("a", None)]);
        Campus::new(vec![f1, f2])
    }

    #[test]
    fn indexes_rooms_and_floors() {
        let campus = sample();
        assert_eq!(campus.floor_count(), 2);
        assert_eq!(campus.room_count(), 4);
        assert_eq!(campus.floor_key("f2"), Some(FloorKey(1)));
        assert_eq!(campus.room_key("c"), Some(RoomKey::new(FloorKey(1), 0)));
        assert_eq!(campus.room(campus.room_key("b").unwrap()).unwrap().name, "B");
        assert!(campus.room_key("zzz").is_none());
    }

    #[test]
    fn duplicate_room_ids_keep_first() {
        let campus = sample();
        assert_eq!(campus.room_key("a"), Some(RoomKey::new(FloorKey(0), 0)));
    }

    #[test]
    fn floor_local_room_lookup() {
        let campus = sample();
        assert_eq!(
            campus.room_key_on(FloorKey(1), "a"),
            Some(RoomKey::new(FloorKey(1), 1))
        );
        assert_eq!(
            campus.room_key_on(FloorKey(0), "a"),
            Some(RoomKey::new(FloorKey(0), 0))
        );
        assert!(campus.room_key_on(FloorKey(1), "b").is_none());
        assert!(campus.room_key_on(FloorKey(9), "a").is_none());
    }

    #[test]
    fn resolves_intersections_of_both_kinds() {
        let campus = sample();
        let door = campus
            .intersection(IntersectionKey::Room {
                floor: FloorKey(0),
                index: 0,
            })
            .unwrap();
        assert_eq!(door.id(), "ab");
        assert!(!door.is_floor_change());
        assert_eq!(door.location(), Point2D::new(1.0, 0.5));

        let stairs_key = campus.floor_intersection_key("s1").unwrap();
        let stairs = campus.intersection(stairs_key).unwrap();
        assert!(stairs.is_floor_change());
        assert_eq!(stairs.is_elevator(), Some(false));

        assert!(campus
            .intersection(IntersectionKey::Floor {
                floor: FloorKey(7),
                index: 0
            })
            .is_none());
    }

    #[test]
    fn partial_code_lookup() {
        let campus = sample();
        assert_eq!(
            campus.find_room_by_partial_code("Room 1.01 upstairs"),
            campus.room_key("c")
        );
        assert_eq!(
            campus.find_room_by_partial_code("0.0"),
            campus.room_key("a")
        );
        assert!(campus.find_room_by_partial_code("no code here").is_none());
        assert!(campus.find_room_by_partial_code("9.99").is_none());
    }

    #[test]
    fn floor_documents_keep_their_order() {
        let ground = r#"{"id": "g", "rooms": [{"id": "lobby"}]}"#;
        let upper = r#"{"id": "u", "name": "Upper", "rooms": [{"id": "lab"}, {"id": "lobby"}]}"#;
        let campus = Campus::from_floor_documents([ground, upper]).unwrap();
        assert_eq!(campus.floor_key("u"), Some(FloorKey(1)));
        assert_eq!(campus.room_key("lab"), Some(RoomKey::new(FloorKey(1), 0)));
        assert_eq!(campus.room_key("lobby"), Some(RoomKey::new(FloorKey(0), 0)));
        assert!(Campus::from_floor_documents([ground, "[]"]).is_err());
    }

    #[test]
    fn json_round_trip_rebuilds_indices() {
        let campus = sample();
        let json = serde_json::to_string(&campus).unwrap();
        assert!(json.starts_with("{\"floors\":"));
        let loaded = Campus::from_json(&json).unwrap();
        assert_eq!(loaded.room_key("c"), campus.room_key("c"));
        assert_eq!(
            loaded.floor_intersection_key("s1"),
            campus.floor_intersection_key("s1")
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(Campus::from_json("{\"floors\": 3}"), Err(Error::Json(_))));
    }
}
