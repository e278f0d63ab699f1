// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Indoor-Nav Core
//!
//! Read-only map model for multi-floor indoor navigation.
//!
//! ## Overview
//!
//! - **Floors** ([`Floor`]) hold rooms, same-floor room intersections
//!   (doors/openings between two rooms) and floor intersections
//!   (stairs/elevators linking rooms across floors).
//! - **Campus** ([`Campus`]) owns every loaded floor and indexes rooms, floors
//!   and floor intersections by id. It is the immutable snapshot passed to
//!   the route planner.
//! - **Keys** ([`FloorKey`], [`RoomKey`], [`IntersectionKey`]) are cheap,
//!   copyable positions inside a `Campus`.
//! - **Intersections** ([`Intersection`]) are a tagged union of both
//!   intersection kinds sharing a location accessor.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use indoor_nav_core::Campus;
//!
//! let campus = Campus::from_json(&std::fs::read_to_string("campus.json")?)?;
//! for issue in campus.validate() {
//!     eprintln!("map issue: {issue}");
//! }
//! let lobby = campus.room_key("lobby").expect("room exists");
//! println!("{}", campus.room(lobby).unwrap().display_name());
//! ```
//!
//! Map coordinates are expected in one unit per meter.

pub mod campus;
pub mod error;
pub mod intersection;
pub mod keys;
pub mod model;
pub mod validation;

pub use campus::Campus;
pub use error::{Error, Result};
pub use intersection::Intersection;
pub use keys::{FloorKey, IntersectionKey, RoomKey};
pub use model::{Floor, FloorIntersection, FloorIntersectionTarget, Room, RoomIntersection};
pub use validation::GraphIssue;

pub use indoor_nav_geometry::Point2D;
