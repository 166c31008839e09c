// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable construction parameters of a wall.
//!
//! Hosts (room builders, bindings, config loaders) describe walls with plain
//! coordinate lists; the dimension is inferred from the corners.

use serde::{Deserialize, Serialize};

/// Plain-data description of a 2D or 3D wall.
///
/// ```json
/// {
///   "corners": [[0, 0, 0], [4, 0, 0], [4, 0, 3], [0, 0, 3]],
///   "holes": [[[1, 0, 0], [2, 0, 0], [2, 0, 2], [1, 0, 2]]],
///   "absorption": [0.1, 0.2],
///   "scatter": [0.0, 0.1],
///   "name": "north"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDescriptor {
    /// One coordinate list per corner, all of length 2 or all of length 3.
    pub corners: Vec<Vec<f64>>,
    /// Hole corner lists (3D walls only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<Vec<f64>>>,
    pub absorption: Vec<f64>,
    pub scatter: Vec<f64>,
    #[serde(default)]
    pub name: String,
}

impl WallDescriptor {
    /// Number of coordinates per corner, `None` without corners.
    pub fn dim(&self) -> Option<usize> {
        self.corners.first().map(Vec::len)
    }
}
