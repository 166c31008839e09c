// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension-generic walls.
//!
//! A [`Wall`] pairs acoustic coefficients with a geometry implementing
//! [`WallGeometry`]. Reflection, side tests and angles only need the wall's
//! plane (origin and normal), so they are written once for every dimension.
//! Intersection, area and equality are delegated to the geometry.

mod segment;
mod surface;

use nalgebra::SVector;

use libroom_geometry::{intersection_code, Intersection, Side, Tolerance};

use crate::acoustics::Acoustics;

pub use segment::Segment;

/// Geometry of a wall in `D` dimensions.
pub trait WallGeometry<const D: usize> {
    /// A point on the wall's plane.
    fn origin(&self) -> SVector<f64, D>;

    /// Unit normal of the wall's plane.
    fn normal(&self) -> SVector<f64, D>;

    /// Length in 2D, surface area in 3D.
    fn area(&self) -> f64;

    /// Intersect the segment `p1 - p2` with the wall.
    fn intersection(&self, p1: &SVector<f64, D>, p2: &SVector<f64, D>) -> Option<Intersection<D>>;

    fn corners(&self) -> &[SVector<f64, D>];

    fn holes(&self) -> Vec<&[SVector<f64, D>]>;

    /// Exact structural equality of the input corners.
    fn same_as(&self, other: &Self) -> bool;

    fn tolerance(&self) -> Tolerance;
}

/// A wall: geometry plus per-band acoustic coefficients.
#[derive(Debug, Clone)]
pub struct Wall<const D: usize, G> {
    name: String,
    acoustics: Acoustics,
    geometry: G,
}

/// A wall in the plane: a line segment.
pub type Wall2D = Wall<2, Segment>;

/// A wall in space: a planar polygon, possibly with holes.
pub type Wall3D = Wall<3, libroom_geometry::Polygon>;

impl<const D: usize, G: WallGeometry<D>> Wall<D, G> {
    /// Assemble a wall from an already built geometry.
    pub fn from_parts(geometry: G, acoustics: Acoustics, name: impl Into<String>) -> Self {
        let wall = Self {
            name: name.into(),
            acoustics,
            geometry,
        };
        tracing::debug!(
            name = %wall.name,
            dim = D,
            bands = wall.acoustics.n_bands(),
            "Built wall"
        );
        wall
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn acoustics(&self) -> &Acoustics {
        &self.acoustics
    }

    pub fn absorption(&self) -> &[f64] {
        self.acoustics.absorption()
    }

    pub fn scatter(&self) -> &[f64] {
        self.acoustics.scatter()
    }

    pub fn transmission(&self) -> &[f64] {
        self.acoustics.transmission()
    }

    pub fn energy_reflection(&self) -> &[f64] {
        self.acoustics.energy_reflection()
    }

    pub fn n_bands(&self) -> usize {
        self.acoustics.n_bands()
    }

    pub fn origin(&self) -> SVector<f64, D> {
        self.geometry.origin()
    }

    pub fn normal(&self) -> SVector<f64, D> {
        self.geometry.normal()
    }

    pub fn corners(&self) -> &[SVector<f64, D>] {
        self.geometry.corners()
    }

    pub fn holes(&self) -> Vec<&[SVector<f64, D>]> {
        self.geometry.holes()
    }

    pub fn tolerance(&self) -> Tolerance {
        self.geometry.tolerance()
    }

    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    /// Intersect the segment `p1 - p2` with the wall.
    pub fn intersection(&self, p1: &SVector<f64, D>, p2: &SVector<f64, D>) -> Option<Intersection<D>> {
        self.geometry.intersection(p1, p2)
    }

    /// Integer code of [`Wall::intersection`]: `-1` none, `0` interior,
    /// `1` segment endpoint, `2` wall boundary, `3` both.
    pub fn intersection_code(&self, p1: &SVector<f64, D>, p2: &SVector<f64, D>) -> i32 {
        intersection_code(&self.intersection(p1, p2))
    }

    pub fn intersects(&self, p1: &SVector<f64, D>, p2: &SVector<f64, D>) -> bool {
        self.intersection(p1, p2).is_some()
    }

    /// Mirror `p` across the wall's plane.
    ///
    /// The mirrored point is always computed. The returned side is the side
    /// of `p` itself; [`Side::OnPlane`] means `p` is its own image and the
    /// caller has to decide what that means.
    pub fn reflect(&self, p: &SVector<f64, D>) -> (Side, SVector<f64, D>) {
        let normal = self.normal();
        let distance = normal.dot(&(self.origin() - p));
        let reflected = p + normal * (2.0 * distance);

        (self.tolerance().sign(-distance), reflected)
    }

    /// Which side of the wall's plane `p` lies on.
    pub fn side(&self, p: &SVector<f64, D>) -> Side {
        self.tolerance().sign((p - self.origin()).dot(&self.normal()))
    }

    /// Specular bounce of a ray travelling from `start` to `hit_point`.
    ///
    /// Returns the point at distance `length` from `hit_point` along the
    /// reflected direction.
    pub fn normal_reflect(
        &self,
        start: &SVector<f64, D>,
        hit_point: &SVector<f64, D>,
        length: f64,
    ) -> SVector<f64, D> {
        let incident = (hit_point - start).normalize();
        hit_point + self.normal_reflect_direction(&incident) * length
    }

    /// Reflect a direction across the wall normal: `i - 2 n (i . n)`.
    pub fn normal_reflect_direction(&self, incident: &SVector<f64, D>) -> SVector<f64, D> {
        let normal = self.normal();
        incident - normal * (2.0 * incident.dot(&normal))
    }

    /// Cosine of the angle between `p` and the wall normal.
    ///
    /// `p` must not be the zero vector.
    pub fn cosine_angle(&self, p: &SVector<f64, D>) -> f64 {
        p.dot(&self.normal()) / p.norm()
    }

    /// True when both walls were built from exactly the same corners (and
    /// holes). Acoustic coefficients and names are not compared.
    pub fn same_as(&self, other: &Self) -> bool {
        self.geometry.same_as(&other.geometry)
    }
}
