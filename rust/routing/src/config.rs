// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Search parameters.

use serde::{Deserialize, Serialize};

/// Building-level search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingSearchConfig {
    /// Node expansions before the search gives up
    pub max_expansions: usize,
}

impl Default for BuildingSearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 2_000_000,
        }
    }
}

impl BuildingSearchConfig {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// Room-level grid search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomSearchConfig {
    /// Side length of a grid cell in meters
    pub cell_size: f64,
    /// Wall distance in meters beyond which no penalty applies
    pub max_clearance: f64,
    /// Cost added per meter of missing clearance (0 = shortest path)
    pub penalty_factor: f64,
    /// Cell expansions before the search gives up
    pub max_expansions: usize,
}

impl Default for RoomSearchConfig {
    fn default() -> Self {
        Self {
            cell_size: 0.8,
            max_clearance: 2.0,
            penalty_factor: 1.0,
            max_expansions: 200_000,
        }
    }
}

impl RoomSearchConfig {
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_max_clearance(mut self, max_clearance: f64) -> Self {
        self.max_clearance = max_clearance;
        self
    }

    pub fn with_penalty_factor(mut self, penalty_factor: f64) -> Self {
        self.penalty_factor = penalty_factor;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Penalty for entering a cell `clearance` meters from the nearest wall.
    pub fn clearance_penalty(&self, clearance: f64) -> f64 {
        // Clamp first: infinite clearance times a zero factor would be NaN
        (self.max_clearance - clearance).max(0.0) * self.penalty_factor
    }
}
