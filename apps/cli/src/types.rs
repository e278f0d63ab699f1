// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON output of a route query.

use indoor_nav_core::{Campus, Point2D};
use indoor_nav_routing::{RefinedLeg, Route, StepAction};
use serde::Serialize;

/// Top-level JSON document printed with `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub origin: String,
    pub target: String,
    pub elevator: bool,
    pub total_distance: f64,
    pub room_count: usize,
    pub floor_count: usize,
    pub steps: Vec<StepResponse>,
}

/// One leg of the route, with ids resolved back to strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub floor_id: String,
    pub room_id: String,
    pub room_name: String,
    pub origin: Point2D,
    pub target: Point2D,
    pub distance: f64,
    pub action: String,
    pub instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point2D>>,
}

impl RouteResponse {
    /// Build the response; `legs` is empty when refinement was skipped.
    pub fn new(campus: &Campus, route: &Route, elevator: bool, legs: &[RefinedLeg]) -> Self {
        let summary = route.summary(campus);
        let steps = route
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let room = campus.room(step.room);
                StepResponse {
                    floor_id: campus
                        .floor(step.floor)
                        .map(|f| f.id.clone())
                        .unwrap_or_default(),
                    room_id: room.map(|r| r.id.clone()).unwrap_or_default(),
                    room_name: room.map(|r| r.display_name()).unwrap_or_default(),
                    origin: step.origin,
                    target: step.target,
                    distance: step.distance,
                    action: action_name(&step.action).to_string(),
                    instruction: step.instruction.clone(),
                    path: legs
                        .iter()
                        .find(|leg| leg.step == i)
                        .and_then(|leg| leg.path.clone()),
                }
            })
            .collect();

        Self {
            origin: summary.origin,
            target: summary.target,
            elevator,
            total_distance: summary.total_distance,
            room_count: summary.rooms,
            floor_count: summary.floors,
            steps,
        }
    }
}

fn action_name(action: &StepAction) -> &'static str {
    match action {
        StepAction::Arrive => "arrive",
        StepAction::MoveTo { .. } => "moveTo",
        StepAction::ChangeFloor { .. } => "changeFloor",
    }
}
