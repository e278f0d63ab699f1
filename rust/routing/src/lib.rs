// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Indoor-Nav Routing
//!
//! Two-tier route planning over a [`Campus`](indoor_nav_core::Campus):
//!
//! 1. [`BuildingPathfinder`] searches the implicit room graph (doors between
//!    rooms, stairs/elevators between floors) and returns a [`Route`] with
//!    one [`Step`] per room.
//! 2. [`RoomPathfinder`] turns a single step into a walking line through the
//!    room's rasterized outline, keeping clear of walls.
//!    [`refine_route`] does this for every step in parallel.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use indoor_nav_core::Campus;
//! use indoor_nav_routing::{refine_route, BuildingPathfinder, RefineOptions, TransitionMode};
//!
//! let campus = Campus::from_json(&json)?;
//! let route = BuildingPathfinder::new(&campus)
//!     .find_route_by_id("lobby", "lab-2.14", TransitionMode::Stairs)?;
//! println!("{}", route.summary(&campus));
//!
//! for (step, leg) in route.steps().iter().zip(refine_route(&campus, &route, &RefineOptions::default())) {
//!     print!("{}", step.instruction);
//!     println!("{} points", leg.path.map_or(0, |p| p.len()));
//! }
//! ```
//!
//! Both searches are deterministic: equal priorities are expanded in
//! insertion order, so repeated queries on the same campus return identical
//! routes.

pub mod building;
pub mod config;
pub mod error;
pub mod queue;
pub mod refine;
pub mod room;
pub mod route;

pub use building::{BuildingPathfinder, TransitionMode};
pub use config::{BuildingSearchConfig, RoomSearchConfig};
pub use error::{Result, RouteError};
pub use queue::PriorityQueue;
pub use refine::{refine_route, refine_step, RefineOptions, RefinedLeg};
pub use room::{find_room_path, RoomPathfinder};
pub use route::{render_instruction, Route, RouteCursor, RouteSummary, Step, StepAction, StepState};
