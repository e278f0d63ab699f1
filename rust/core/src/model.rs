// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Map data types, as written by the floor-plan authoring tool.
//!
//! Field names follow the tool's camelCase JSON. Everything here is plain
//! data; lookups across floors live on [`Campus`](crate::Campus).

use indoor_nav_geometry::{polygon_center, Point2D};
use serde::{Deserialize, Serialize};

use crate::error::Result;

fn enabled_by_default() -> bool {
    true
}

/// One building level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Same-floor connections between two rooms
    #[serde(default)]
    pub intersections: Vec<RoomIntersection>,
    /// Stairs and elevators leaving rooms on this floor
    #[serde(default)]
    pub floor_intersections: Vec<FloorIntersection>,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub scale: f64,
    /// Display flag; disabled floors are still routable.
    #[serde(rename = "isEnabled", default = "enabled_by_default")]
    pub enabled: bool,
}

impl Floor {
    /// Parse a single floor file.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Room intersections with `room_id` on either end, with their indices.
    pub fn intersections_touching<'a>(
        &'a self,
        room_id: &'a str,
    ) -> impl Iterator<Item = (usize, &'a RoomIntersection)> + 'a {
        self.intersections
            .iter()
            .enumerate()
            .filter(move |(_, i)| i.touches(room_id))
    }

    /// Floor intersections anchored in `room_id`, with their indices.
    pub fn floor_intersections_from<'a>(
        &'a self,
        room_id: &'a str,
    ) -> impl Iterator<Item = (usize, &'a FloorIntersection)> + 'a {
        self.floor_intersections
            .iter()
            .enumerate()
            .filter(move |(_, i)| i.origin_room_id == room_id)
    }
}

/// A room outline with its labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Outline, closed implicitly
    #[serde(default)]
    pub points: Vec<Point2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Room {
    /// Label shown to travelers: `code (name)`, or whichever of the two is set.
    pub fn display_name(&self) -> String {
        match self.code.as_deref().filter(|c| !c.is_empty()) {
            None => self.name.clone(),
            Some(code) if self.name.is_empty() => code.to_string(),
            Some(code) => format!("{} ({})", code, self.name),
        }
    }

    /// Bounding-box center of the outline.
    pub fn center(&self) -> Point2D {
        polygon_center(&self.points)
    }
}

/// Undirected connection between two rooms on the same floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomIntersection {
    pub id: String,
    pub room_id1: String,
    pub room_id2: String,
    /// Location of the door/opening
    pub intersection: Point2D,
}

impl RoomIntersection {
    pub fn touches(&self, room_id: &str) -> bool {
        self.room_id1 == room_id || self.room_id2 == room_id
    }

    /// The room on the other end, when `room_id` is one of the two ends.
    pub fn other_room(&self, room_id: &str) -> Option<&str> {
        if self.room_id1 == room_id {
            Some(&self.room_id2)
        } else if self.room_id2 == room_id {
            Some(&self.room_id1)
        } else {
            None
        }
    }
}

/// A stairs or elevator access point inside a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorIntersection {
    pub id: String,
    pub intersection: Point2D,
    #[serde(default)]
    pub is_elevator: bool,
    pub origin_room_id: String,
    /// Access points on other floors reachable from this one
    #[serde(default)]
    pub targets: Vec<FloorIntersectionTarget>,
}

/// Link from a floor intersection to its counterpart on another floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorIntersectionTarget {
    #[serde(rename = "mapId")]
    pub floor_id: String,
    pub intersection_id: String,
}
