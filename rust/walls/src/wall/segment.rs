// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D walls: a line segment between two corners.

use nalgebra::Vector2;

use libroom_geometry::{segment_intersection_2d, Intersection, Tolerance};

use super::{Wall, Wall2D, WallGeometry};
use crate::acoustics::Acoustics;
use crate::error::{Error, Result};

/// Segment geometry of a 2D wall.
#[derive(Debug, Clone)]
pub struct Segment {
    corners: [Vector2<f64>; 2],
    normal: Vector2<f64>,
    tolerance: Tolerance,
}

impl Segment {
    /// Segment through exactly two distinct corners.
    ///
    /// The normal is the corner-to-corner direction turned a quarter turn
    /// clockwise.
    pub fn new(corners: &[Vector2<f64>], tolerance: Tolerance) -> Result<Self> {
        let [c0, c1] = <[Vector2<f64>; 2]>::try_from(corners).map_err(|_| {
            Error::InvalidCorners(format!(
                "a 2D wall needs exactly 2 corners, got {}",
                corners.len()
            ))
        })?;

        let dir = c1 - c0;
        if dir.norm() <= tolerance.eps {
            return Err(Error::InvalidCorners(
                "the two corners of a 2D wall coincide".to_string(),
            ));
        }

        Ok(Self {
            corners: [c0, c1],
            normal: Vector2::new(dir.y, -dir.x).normalize(),
            tolerance,
        })
    }
}

impl WallGeometry<2> for Segment {
    fn origin(&self) -> Vector2<f64> {
        self.corners[0]
    }

    fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    fn area(&self) -> f64 {
        (self.corners[1] - self.corners[0]).norm()
    }

    fn intersection(&self, p1: &Vector2<f64>, p2: &Vector2<f64>) -> Option<Intersection<2>> {
        segment_intersection_2d(p1, p2, &self.corners[0], &self.corners[1], &self.tolerance)
    }

    fn corners(&self) -> &[Vector2<f64>] {
        &self.corners
    }

    fn holes(&self) -> Vec<&[Vector2<f64>]> {
        Vec::new()
    }

    fn same_as(&self, other: &Self) -> bool {
        self.corners == other.corners
    }

    fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}

impl Wall2D {
    /// Build a 2D wall from its two corners and per-band coefficients.
    pub fn new(
        corners: &[Vector2<f64>],
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        name: impl Into<String>,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let acoustics = Acoustics::new(absorption, scatter)?;
        let segment = Segment::new(corners, tolerance)?;
        Ok(Wall::from_parts(segment, acoustics, name))
    }
}
