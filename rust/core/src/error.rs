// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for map loading.

use thiserror::Error;

/// Result type alias for map operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading map data.
#[derive(Debug, Error)]
pub enum Error {
    /// The map file is not valid JSON or does not match the map schema.
    #[error("map parse error: {0}")]
    Json(#[from] serde_json::Error),
}
