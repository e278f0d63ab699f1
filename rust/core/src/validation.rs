// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Up-front consistency checks for a loaded campus.
//!
//! The route planner tolerates every issue reported here by skipping the
//! affected edge, so validation is advisory: callers decide whether to log,
//! reject the map or carry on.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::campus::Campus;

/// A broken or suspicious reference in the map graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphIssue {
    #[error("intersection '{intersection}' on floor '{floor}' references unknown room '{room}'")]
    UnknownRoom {
        floor: String,
        intersection: String,
        room: String,
    },

    #[error("floor intersection '{intersection}' targets unknown floor '{target_floor}'")]
    UnknownFloor {
        intersection: String,
        target_floor: String,
    },

    #[error(
        "floor intersection '{intersection}' targets '{target}', which is not on floor '{target_floor}'"
    )]
    UnknownFloorIntersection {
        intersection: String,
        target_floor: String,
        target: String,
    },

    /// Linked transition points disagree on stairs vs. elevator.
    #[error("floor intersection '{intersection}' links to '{target}' with a different elevator flag")]
    TransitionModeMismatch { intersection: String, target: String },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

impl Campus {
    /// Collects every issue in floor order.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        let mut floor_ids = FxHashSet::default();
        let mut room_ids = FxHashSet::default();
        let mut transition_ids = FxHashSet::default();

        for floor in self.floors() {
            if !floor_ids.insert(floor.id.as_str()) {
                issues.push(duplicate("floor", &floor.id));
            }

            // Room references must stay on the intersection's own floor
            let local_rooms: FxHashSet<&str> = floor.rooms.iter().map(|r| r.id.as_str()).collect();
            for room in &floor.rooms {
                if !room_ids.insert(room.id.as_str()) {
                    issues.push(duplicate("room", &room.id));
                }
            }

            for door in &floor.intersections {
                for room in [&door.room_id1, &door.room_id2] {
                    if !local_rooms.contains(room.as_str()) {
                        issues.push(GraphIssue::UnknownRoom {
                            floor: floor.id.clone(),
                            intersection: door.id.clone(),
                            room: room.clone(),
                        });
                    }
                }
            }

            for transition in &floor.floor_intersections {
                if !transition_ids.insert(transition.id.as_str()) {
                    issues.push(duplicate("floor intersection", &transition.id));
                }
                if !local_rooms.contains(transition.origin_room_id.as_str()) {
                    issues.push(GraphIssue::UnknownRoom {
                        floor: floor.id.clone(),
                        intersection: transition.id.clone(),
                        room: transition.origin_room_id.clone(),
                    });
                }

                for target in &transition.targets {
                    let Some(target_floor) = self
                        .floor_key(&target.floor_id)
                        .and_then(|key| self.floor(key))
                    else {
                        issues.push(GraphIssue::UnknownFloor {
                            intersection: transition.id.clone(),
                            target_floor: target.floor_id.clone(),
                        });
                        continue;
                    };

                    match target_floor
                        .floor_intersections
                        .iter()
                        .find(|i| i.id == target.intersection_id)
                    {
                        None => issues.push(GraphIssue::UnknownFloorIntersection {
                            intersection: transition.id.clone(),
                            target_floor: target.floor_id.clone(),
                            target: target.intersection_id.clone(),
                        }),
                        Some(linked) if linked.is_elevator != transition.is_elevator => {
                            issues.push(GraphIssue::TransitionModeMismatch {
                                intersection: transition.id.clone(),
                                target: linked.id.clone(),
                            })
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        issues
    }
}

fn duplicate(kind: &'static str, id: &str) -> GraphIssue {
    GraphIssue::DuplicateId {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: &str = r#"{
        "floors": [
            {
                "id": "f1",
                "rooms": [{"id": "a"}, {"id": "b"}],
                "intersections": [
                    {"id": "ab", "roomId1": "a", "roomId2": "b", "intersection": {"x": 1, "y": 0}},
                    {"id": "ax", "roomId1": "a", "roomId2": "ghost", "intersection": {"x": 0, "y": 1}}
                ],
                "floorIntersections": [
                    {"id": "s1", "intersection": {"x": 0, "y": 0}, "originRoomId": "b",
                     "targets": [
                        {"mapId": "f2", "intersectionId": "e2"},
                        {"mapId": "f9", "intersectionId": "s9"},
                        {"mapId": "f2", "intersectionId": "nope"}
                     ]}
                ]
            },
            {
                "id": "f2",
                "rooms": [{"id": "c"}, {"id": "a"}],
                "floorIntersections": [
                    {"id": "e2", "intersection": {"x": 0, "y": 0}, "isElevator": true,
                     "originRoomId": "c", "targets": []}
                ]
            }
        ]
    }"#;

    #[test]
    fn reports_each_broken_reference() {
        let campus = Campus::from_json(BROKEN).unwrap();
        let issues = campus.validate();

        assert_eq!(
            issues,
            vec![
                GraphIssue::UnknownRoom {
                    floor: "f1".into(),
                    intersection: "ax".into(),
                    room: "ghost".into(),
                },
                GraphIssue::TransitionModeMismatch {
                    intersection: "s1".into(),
                    target: "e2".into(),
                },
                GraphIssue::UnknownFloor {
                    intersection: "s1".into(),
                    target_floor: "f9".into(),
                },
                GraphIssue::UnknownFloorIntersection {
                    intersection: "s1".into(),
                    target_floor: "f2".into(),
                    target: "nope".into(),
                },
                GraphIssue::DuplicateId {
                    kind: "room",
                    id: "a".into(),
                },
            ]
        );
    }

    #[test]
    fn issue_messages_name_the_ids() {
        let issue = GraphIssue::UnknownFloor {
            intersection: "s1".into(),
            target_floor: "f9".into(),
        };
        assert_eq!(
            issue.to_string(),
            "floor intersection 's1' targets unknown floor 'f9'"
        );
    }

    #[test]
    fn clean_campus_has_no_issues() {
        let json = r#"{"floors": [{"id": "f1", "rooms": [{"id": "a"}, {"id": "b"}],
            "intersections": [{"id": "ab", "roomId1": "a", "roomId2": "b", "intersection": {"x": 1, "y": 0}}]}]}"#;
        assert!(Campus::from_json(json).unwrap().validate().is_empty());
    }
}
