// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # libroom walls
//!
//! Walls are the collision geometry of a room-acoustics simulation: a line
//! segment in 2D, a planar polygon (optionally with holes) in 3D, each
//! carrying per-frequency-band absorption and scattering coefficients.
//!
//! Ray tracers and image-source models query walls through the shared
//! operations of [`Wall`]: segment intersection with explicit degenerate-case
//! codes, point reflection across the wall plane, side classification and
//! specular reflection of directions. Walls are immutable once built and can
//! be shared across threads.

pub mod acoustics;
pub mod any;
pub mod descriptor;
pub mod error;
pub mod wall;

pub use acoustics::Acoustics;
pub use any::AnyWall;
pub use descriptor::WallDescriptor;
pub use error::{Error, Result};
pub use wall::{Segment, Wall, Wall2D, Wall3D, WallGeometry};

pub use libroom_geometry::{
    Intersection, IntersectionKind, Polygon, Side, Tolerance, ISECT_NONE,
};
