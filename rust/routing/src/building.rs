// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-to-room route search across floors.
//!
//! The search graph is implicit: a node is a room together with the
//! intersection it was entered through. From a node the search can
//!
//! - walk through a room intersection into the room on its other end,
//! - approach one of the room's own stairs/elevators (same room, entered
//!   through that floor intersection),
//! - and, when standing at a stairs/elevator, ride it to each linked floor,
//!   arriving in the linked intersection's room.
//!
//! Edge costs are straight-line distances between consecutive entry points;
//! the heuristic is the distance to the closest door of the target room.
//! Neighbors of one expansion are visited in ascending priority, and the
//! search ends at the first generated neighbor that lies in the target room.

use indoor_nav_core::{
    Campus, FloorIntersection, FloorKey, Intersection, IntersectionKey, Point2D, Room, RoomKey,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::BuildingSearchConfig;
use crate::error::{Result, RouteError};
use crate::queue::PriorityQueue;
use crate::route::{render_instruction, Route, Step, StepAction};

/// Which vertical transitions a query may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionMode {
    #[default]
    Stairs,
    Elevator,
}

impl TransitionMode {
    pub fn is_elevator(self) -> bool {
        self == TransitionMode::Elevator
    }

    fn allows(self, is_elevator: bool) -> bool {
        self.is_elevator() == is_elevator
    }
}

impl From<bool> for TransitionMode {
    /// `true` selects elevators only.
    fn from(elevator_only: bool) -> Self {
        if elevator_only {
            TransitionMode::Elevator
        } else {
            TransitionMode::Stairs
        }
    }
}

// =============================================================================
// Search state
// =============================================================================

#[derive(Debug, Clone)]
struct SearchNode {
    room: RoomKey,
    entry: Option<IntersectionKey>,
    /// Entry location, or the room center for the start node
    location: Point2D,
    parent: Option<usize>,
    cost: f64,
}

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    node: usize,
    f: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    room: RoomKey,
    entry: IntersectionKey,
    location: Point2D,
    cost: f64,
    f: f64,
}

type Neighbors = SmallVec<[Candidate; 8]>;

/// Building-level A* over a [`Campus`].
#[derive(Debug, Clone, Copy)]
pub struct BuildingPathfinder<'a> {
    campus: &'a Campus,
    config: BuildingSearchConfig,
}

impl<'a> BuildingPathfinder<'a> {
    pub fn new(campus: &'a Campus) -> Self {
        Self::with_config(campus, BuildingSearchConfig::default())
    }

    pub fn with_config(campus: &'a Campus, config: BuildingSearchConfig) -> Self {
        Self { campus, config }
    }

    pub fn campus(&self) -> &'a Campus {
        self.campus
    }

    /// Route between two rooms, or `None` when no route exists.
    pub fn find_route(&self, origin: RoomKey, target: RoomKey, mode: TransitionMode) -> Option<Route> {
        match self.try_find_route(origin, target, mode) {
            Ok(route) => Some(route),
            Err(err) => {
                tracing::warn!(%err, ?origin, ?target, ?mode, "no route");
                None
            }
        }
    }

    /// Route between two rooms given by id.
    pub fn find_route_by_id(&self, origin: &str, target: &str, mode: TransitionMode) -> Result<Route> {
        let lookup = |id: &str| {
            self.campus
                .room_key(id)
                .ok_or_else(|| RouteError::UnknownRoom(id.to_string()))
        };
        self.try_find_route(lookup(origin)?, lookup(target)?, mode)
    }

    /// Route between two rooms, reporting why none was found.
    pub fn try_find_route(&self, origin: RoomKey, target: RoomKey, mode: TransitionMode) -> Result<Route> {
        let origin_room = self.room(origin)?;
        let target_room = self.room(target)?;

        if origin == target {
            return Ok(Route::new(vec![self.arrival_step(origin, origin_room)]));
        }

        let target_doors = self.target_doors(target, target_room);
        let heuristic = |p: Point2D| {
            target_doors
                .iter()
                .map(|d| d.distance_to(&p))
                .min_by(f64::total_cmp)
                .unwrap_or(0.0)
        };

        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut best: FxHashMap<(RoomKey, Option<IntersectionKey>), f64> = FxHashMap::default();
        let mut open = PriorityQueue::new(|e: &OpenNode| e.f);

        let center = origin_room.center();
        let start_f = heuristic(center);
        nodes.push(SearchNode {
            room: origin,
            entry: None,
            location: center,
            parent: None,
            cost: 0.0,
        });
        best.insert((origin, None), start_f);
        open.push(OpenNode { node: 0, f: start_f });

        let mut expansions = 0usize;
        while let Some(OpenNode { node: current, .. }) = open.pop() {
            expansions += 1;
            if expansions > self.config.max_expansions {
                tracing::warn!(expansions, "building search hit its expansion cap");
                return Err(RouteError::SafetyCapExceeded { expansions });
            }

            let mut neighbors = self.neighbors(&nodes[current], mode, &heuristic);
            neighbors.sort_by(|a, b| a.f.total_cmp(&b.f));

            for candidate in neighbors {
                let node = SearchNode {
                    room: candidate.room,
                    entry: Some(candidate.entry),
                    location: candidate.location,
                    parent: Some(current),
                    cost: candidate.cost,
                };

                if candidate.room == target {
                    nodes.push(node);
                    tracing::debug!(expansions, nodes = nodes.len(), "building route found");
                    return Ok(self.reconstruct(&nodes, nodes.len() - 1));
                }

                let key = (candidate.room, Some(candidate.entry));
                if best.get(&key).is_some_and(|&f| f <= candidate.f) {
                    continue;
                }
                best.insert(key, candidate.f);
                nodes.push(node);
                open.push(OpenNode {
                    node: nodes.len() - 1,
                    f: candidate.f,
                });
            }
        }

        tracing::debug!(expansions, "building search exhausted");
        Err(RouteError::NoPathFound)
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Unsorted successors of `node`: doors, approaches, then floor changes.
    fn neighbors(
        &self,
        node: &SearchNode,
        mode: TransitionMode,
        heuristic: &impl Fn(Point2D) -> f64,
    ) -> Neighbors {
        let mut out = Neighbors::new();
        let Some(floor) = self.campus.floor(node.room.floor) else {
            return out;
        };
        let Some(room) = floor.rooms.get(node.room.index) else {
            return out;
        };

        let mut add = |to: RoomKey, entry: IntersectionKey, location: Point2D| {
            let cost = node.cost + node.location.distance_to(&location);
            out.push(Candidate {
                room: to,
                entry,
                location,
                cost,
                f: cost + heuristic(location),
            });
        };

        for (index, door) in floor.intersections_touching(&room.id) {
            let Some(other_id) = door.other_room(&room.id) else {
                continue;
            };
            let Some(other) = self.campus.room_key_on(node.room.floor, other_id) else {
                tracing::warn!(intersection = %door.id, room = %other_id, "door leads to a room not on its floor");
                continue;
            };
            let entry = IntersectionKey::Room {
                floor: node.room.floor,
                index,
            };
            add(other, entry, door.intersection);
        }

        for (index, transition) in floor.floor_intersections_from(&room.id) {
            if !mode.allows(transition.is_elevator) {
                continue;
            }
            let entry = IntersectionKey::Floor {
                floor: node.room.floor,
                index,
            };
            add(node.room, entry, transition.intersection);
        }

        let riding = match node.entry {
            Some(key @ IntersectionKey::Floor { .. }) => match self.campus.intersection(key) {
                Some(Intersection::Floor(transition)) => Some(transition),
                _ => None,
            },
            _ => None,
        };
        if let Some(transition) = riding {
            for link in &transition.targets {
                let Some(dest_floor) = self.campus.floor_key(&link.floor_id) else {
                    tracing::warn!(intersection = %transition.id, floor = %link.floor_id, "link to unknown floor");
                    continue;
                };
                let Some((index, dest)) = self.linked_intersection(dest_floor, &link.intersection_id) else {
                    tracing::warn!(
                        intersection = %transition.id,
                        target = %link.intersection_id,
                        "link to unknown floor intersection"
                    );
                    continue;
                };
                if !mode.allows(dest.is_elevator) {
                    tracing::warn!(
                        intersection = %transition.id,
                        target = %dest.id,
                        "linked transition has a different elevator flag"
                    );
                    continue;
                }
                let Some(dest_room) = self.campus.room_key_on(dest_floor, &dest.origin_room_id) else {
                    tracing::warn!(
                        intersection = %dest.id,
                        room = %dest.origin_room_id,
                        "transition in a room not on its floor"
                    );
                    continue;
                };
                let entry = IntersectionKey::Floor {
                    floor: dest_floor,
                    index,
                };
                add(dest_room, entry, dest.intersection);
            }
        }

        out
    }

    fn linked_intersection(
        &self,
        floor: FloorKey,
        id: &str,
    ) -> Option<(usize, &'a FloorIntersection)> {
        self.campus
            .floor(floor)?
            .floor_intersections
            .iter()
            .enumerate()
            .find(|(_, i)| i.id == id)
    }

    /// Door locations of the target room on its own floor.
    fn target_doors(&self, target: RoomKey, room: &Room) -> Vec<Point2D> {
        self.campus
            .floor(target.floor)
            .map(|floor| {
                floor
                    .intersections_touching(&room.id)
                    .map(|(_, door)| door.intersection)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn room(&self, key: RoomKey) -> Result<&'a Room> {
        self.campus
            .room(key)
            .ok_or_else(|| RouteError::UnknownRoom(format!("{key:?}")))
    }

    // =========================================================================
    // Reconstruction
    // =========================================================================

    fn arrival_step(&self, key: RoomKey, room: &Room) -> Step {
        let center = room.center();
        let action = StepAction::Arrive;
        Step {
            floor: key.floor,
            room: key,
            origin: center,
            target: center,
            distance: 0.0,
            action,
            instruction: render_instruction(&room.display_name(), &action.describe(self.campus), 0.0),
            entry: None,
            exit: None,
        }
    }

    /// Walk the parent chain back from `terminal`, one step per kept node.
    ///
    /// The node that walks up to a stairs/elevator (entered through a floor
    /// intersection from a node that was not) is folded into the step before
    /// it. Each step's action is the transition of the node after it.
    fn reconstruct(&self, nodes: &[SearchNode], terminal: usize) -> Route {
        let mut steps = Vec::new();
        let mut next_action = StepAction::Arrive;
        let mut exit: Option<IntersectionKey> = None;
        let mut cursor = Some(terminal);

        while let Some(i) = cursor {
            let node = &nodes[i];
            let parent_entry = node.parent.and_then(|p| nodes[p].entry);
            let approach = is_floor_change(node.entry) && !is_floor_change(parent_entry);

            if !approach {
                let room = self.campus.room(node.room);
                let center = room.map(Room::center).unwrap_or_default();
                let target = exit
                    .and_then(|k| self.campus.intersection(k))
                    .map(|x| x.location())
                    .unwrap_or(center);
                let origin = node.location;
                let distance = origin.distance_to(&target);
                let name = room.map(Room::display_name).unwrap_or_default();

                steps.push(Step {
                    floor: node.room.floor,
                    room: node.room,
                    origin,
                    target,
                    distance,
                    action: next_action,
                    instruction: render_instruction(&name, &next_action.describe(self.campus), distance),
                    entry: node.entry,
                    exit,
                });

                next_action = if is_floor_change(node.entry) {
                    StepAction::ChangeFloor {
                        floor: node.room.floor,
                    }
                } else {
                    StepAction::MoveTo { room: node.room }
                };
            }

            exit = node.entry;
            cursor = node.parent;
        }

        steps.reverse();
        Route::new(steps)
    }
}

fn is_floor_change(entry: Option<IntersectionKey>) -> bool {
    entry.is_some_and(|k| k.is_floor_change())
}
