// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! libroom geometry
//!
//! Planar surfaces for room-acoustics walls: plane fitting by SVD with
//! nalgebra, segment/surface intersection with explicit degenerate cases, and
//! polygons with holes.

pub mod config;
pub mod error;
pub mod intersection;
pub mod kernel;
pub mod polygon;

// Re-export nalgebra types for convenience
pub use nalgebra::{SVector, Vector2, Vector3};

pub use config::{Tolerance, DEFAULT_EPS};
pub use error::{Error, Result};
pub use intersection::{intersection_code, Intersection, IntersectionKind, ISECT_NONE};
pub use kernel::{
    area_2d_polygon, point_in_polygon, segment_intersection_2d, segment_plane_intersection,
    PolygonSide, Side,
};
pub use polygon::{Polygon, PolygonWithHole, SimplePolygon};
