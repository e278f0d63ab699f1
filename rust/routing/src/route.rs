// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finished routes and their presentation.
//!
//! A [`Route`] is the forward-ordered list of [`Step`]s produced by the
//! building search, one per room traversed. Every step carries the action
//! that leaves its room (move to the next room, change floor, or arrive) and
//! the rendered instruction text. [`RouteSummary`] is the overview shown
//! before guidance starts; [`RouteCursor`] replays the steps one by one.

use std::fmt;

use indoor_nav_core::{Campus, FloorKey, IntersectionKey, Point2D, RoomKey};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// What the traveler does at the end of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepAction {
    /// The step ends in the target room.
    Arrive,
    /// Walk through a door into `room`.
    MoveTo { room: RoomKey },
    /// Take stairs/elevator to `floor`.
    ChangeFloor { floor: FloorKey },
}

impl StepAction {
    /// Second instruction line for this action.
    pub fn describe(&self, campus: &Campus) -> String {
        match *self {
            StepAction::Arrive => "You arrived!".to_string(),
            StepAction::MoveTo { room } => format!(
                "-> Move to {}",
                campus.room(room).map(|r| r.display_name()).unwrap_or_default()
            ),
            StepAction::ChangeFloor { floor } => format!(
                "-> Change to Floor {}",
                campus.floor(floor).map(|f| f.name.as_str()).unwrap_or_default()
            ),
        }
    }
}

/// One leg of a route, inside a single room.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub floor: FloorKey,
    pub room: RoomKey,
    /// Where the leg starts: the entry intersection, or the room center
    pub origin: Point2D,
    /// Where the leg ends: the next leg's entry, or the room center
    pub target: Point2D,
    /// Straight-line length of the leg in meters
    pub distance: f64,
    pub action: StepAction,
    pub instruction: String,
    /// Intersection the room was entered through (`None` for the first step)
    pub entry: Option<IntersectionKey>,
    /// Intersection the room is left through (`None` for the last step)
    pub exit: Option<IntersectionKey>,
}

/// Render the three-line instruction block of a step.
pub fn render_instruction(room_name: &str, action_text: &str, distance: f64) -> String {
    format!("You're in {room_name}\n{action_text}\n-> Distance: ({distance:.2}m)\n")
}

/// A complete route from origin to target room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn origin(&self) -> Option<RoomKey> {
        self.steps.first().map(|s| s.room)
    }

    pub fn target(&self) -> Option<RoomKey> {
        self.steps.last().map(|s| s.room)
    }

    /// Sum of all leg distances.
    pub fn total_distance(&self) -> f64 {
        self.steps.iter().map(|s| s.distance).sum()
    }

    /// Floors in the order they are first visited.
    pub fn floors(&self) -> Vec<FloorKey> {
        let mut seen = FxHashSet::default();
        self.steps
            .iter()
            .map(|s| s.floor)
            .filter(|f| seen.insert(*f))
            .collect()
    }

    /// Number of distinct floors the route touches.
    pub fn floor_count(&self) -> usize {
        self.floors().len()
    }

    pub fn summary(&self, campus: &Campus) -> RouteSummary {
        let name = |key: Option<RoomKey>| {
            key.and_then(|k| campus.room(k))
                .map(|r| r.display_name())
                .unwrap_or_default()
        };
        RouteSummary {
            origin: name(self.origin()),
            target: name(self.target()),
            rooms: self.len(),
            floors: self.floor_count(),
            total_distance: self.total_distance(),
        }
    }

    pub fn cursor(&self) -> RouteCursor<'_> {
        RouteCursor::new(self)
    }
}

/// Overview shown when a route is found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub origin: String,
    pub target: String,
    pub rooms: usize,
    pub floors: usize,
    pub total_distance: f64,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route found!")?;
        writeln!(f, "-> Runs from {} to {}.", self.origin, self.target)?;
        writeln!(f, "-> It consists of {} rooms.", self.rooms)?;
        writeln!(f, "-> Route goes across {} floor(s).", self.floors)?;
        write!(f, "-> Total distance is {:.2} meters.", self.total_distance)
    }
}

/// Highlight state of a step relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepState {
    Visited,
    Current,
    Upcoming,
}

/// Step-by-step replay over a route.
#[derive(Debug, Clone)]
pub struct RouteCursor<'a> {
    route: &'a Route,
    index: usize,
}

impl<'a> RouteCursor<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a Step> {
        self.route.steps.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.route.len()
    }

    /// Move to the next step; stays put on the last one.
    pub fn advance(&mut self) -> Option<&'a Step> {
        if self.is_last() {
            return None;
        }
        self.index += 1;
        self.current()
    }

    /// Move to the previous step; stays put on the first one.
    pub fn back(&mut self) -> Option<&'a Step> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.current()
    }

    /// Move to `index` if it is a valid step.
    pub fn jump(&mut self, index: usize) -> Option<&'a Step> {
        if index >= self.route.len() {
            return None;
        }
        self.index = index;
        self.current()
    }

    pub fn state(&self, index: usize) -> StepState {
        match index.cmp(&self.index) {
            std::cmp::Ordering::Less => StepState::Visited,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    /// Every step paired with its highlight state.
    pub fn states(&self) -> impl Iterator<Item = (&'a Step, StepState)> + '_ {
        self.route
            .steps
            .iter()
            .enumerate()
            .map(move |(i, step)| (step, self.state(i)))
    }
}
