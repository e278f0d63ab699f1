// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use indoor_nav_routing::{BuildingSearchConfig, RoomSearchConfig};

/// Search parameters for one CLI run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Room grid cell size in meters.
    pub cell_size: f64,
    /// Wall distance beyond which no clearance penalty applies.
    pub max_clearance: f64,
    /// Scale of the clearance penalty.
    pub penalty_factor: f64,
    /// Expansion cap of the building-level search.
    pub max_expansions: usize,
    /// Expansion cap of each room-level search.
    pub room_max_expansions: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; missing or unparsable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let room = RoomSearchConfig::default();
        let building = BuildingSearchConfig::default();
        Self {
            cell_size: lookup("INDOOR_NAV_CELL_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v > 0.0)
                .unwrap_or(room.cell_size),
            max_clearance: lookup("INDOOR_NAV_MAX_CLEARANCE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(room.max_clearance),
            penalty_factor: lookup("INDOOR_NAV_PENALTY_FACTOR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(room.penalty_factor),
            max_expansions: lookup("INDOOR_NAV_MAX_EXPANSIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(building.max_expansions),
            room_max_expansions: lookup("INDOOR_NAV_ROOM_MAX_EXPANSIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(room.max_expansions),
        }
    }

    pub fn room_search(&self) -> RoomSearchConfig {
        RoomSearchConfig::default()
            .with_cell_size(self.cell_size)
            .with_max_clearance(self.max_clearance)
            .with_penalty_factor(self.penalty_factor)
            .with_max_expansions(self.room_max_expansions)
    }

    pub fn building_search(&self) -> BuildingSearchConfig {
        BuildingSearchConfig::default().with_max_expansions(self.max_expansions)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn missing_values_use_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.cell_size, 0.8);
        assert_eq!(config.max_clearance, 2.0);
        assert_eq!(config.penalty_factor, 1.0);
        assert_eq!(config.max_expansions, 2_000_000);
        assert_eq!(config.room_max_expansions, 200_000);
    }

    #[test]
    fn overrides_are_parsed() {
        let vars = [
            ("INDOOR_NAV_CELL_SIZE", "0.5"),
            ("INDOOR_NAV_PENALTY_FACTOR", "3"),
            ("INDOOR_NAV_MAX_EXPANSIONS", "1000"),
        ];
        let config = Config::from_lookup(lookup(&vars));
        assert_eq!(config.cell_size, 0.5);
        assert_eq!(config.penalty_factor, 3.0);
        assert_eq!(config.building_search().max_expansions, 1000);
        assert_eq!(config.room_search().cell_size, 0.5);
        assert_eq!(config.room_search().max_expansions, 200_000);
    }

    #[test]
    fn invalid_values_fall_back() {
        let vars = [
            ("INDOOR_NAV_CELL_SIZE", "-1"),
            ("INDOOR_NAV_MAX_CLEARANCE", "wide"),
            ("INDOOR_NAV_ROOM_MAX_EXPANSIONS", "lots"),
        ];
        let config = Config::from_lookup(lookup(&vars));
        assert_eq!(config.cell_size, 0.8);
        assert_eq!(config.max_clearance, 2.0);
        assert_eq!(config.room_max_expansions, 200_000);
    }
}
