// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Index keys into a [`Campus`](crate::Campus).
//!
//! Keys are positions in the campus' floor list and in each floor's room and
//! intersection lists. They stay valid as long as the campus is not rebuilt,
//! which holds for the whole lifetime of a query.

use serde::{Deserialize, Serialize};

/// Position of a floor in the campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FloorKey(pub usize);

/// Position of a room: its floor and its index in that floor's room list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomKey {
    pub floor: FloorKey,
    pub index: usize,
}

impl RoomKey {
    pub fn new(floor: FloorKey, index: usize) -> Self {
        Self { floor, index }
    }
}

/// Position of an intersection of either kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IntersectionKey {
    /// Index into `Floor::intersections`
    Room { floor: FloorKey, index: usize },
    /// Index into `Floor::floor_intersections`
    Floor { floor: FloorKey, index: usize },
}

impl IntersectionKey {
    /// Floor the intersection belongs to.
    pub fn floor(&self) -> FloorKey {
        match *self {
            IntersectionKey::Room { floor, .. } | IntersectionKey::Floor { floor, .. } => floor,
        }
    }

    /// True for stairs/elevator transition points.
    pub fn is_floor_change(&self) -> bool {
        matches!(self, IntersectionKey::Floor { .. })
    }
}
