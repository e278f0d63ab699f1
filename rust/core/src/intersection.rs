// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Borrowed view over either intersection kind.

use indoor_nav_geometry::Point2D;

use crate::model::{FloorIntersection, RoomIntersection};

/// A point where a traveler can leave a room.
#[derive(Debug, Clone, Copy)]
pub enum Intersection<'a> {
    /// Door/opening to another room on the same floor
    Room(&'a RoomIntersection),
    /// Stairs or elevator to other floors
    Floor(&'a FloorIntersection),
}

impl<'a> Intersection<'a> {
    pub fn location(&self) -> Point2D {
        match self {
            Intersection::Room(i) => i.intersection,
            Intersection::Floor(i) => i.intersection,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            Intersection::Room(i) => &i.id,
            Intersection::Floor(i) => &i.id,
        }
    }

    pub fn is_floor_change(&self) -> bool {
        matches!(self, Intersection::Floor(_))
    }

    /// Elevator flag for floor changes, `None` for room intersections.
    pub fn is_elevator(&self) -> Option<bool> {
        match self {
            Intersection::Room(_) => None,
            Intersection::Floor(i) => Some(i.is_elevator),
        }
    }
}

impl<'a> From<&'a RoomIntersection> for Intersection<'a> {
    fn from(i: &'a RoomIntersection) -> Self {
        Intersection::Room(i)
    }
}

impl<'a> From<&'a FloorIntersection> for Intersection<'a> {
    fn from(i: &'a FloorIntersection) -> Self {
        Intersection::Floor(i)
    }
}
