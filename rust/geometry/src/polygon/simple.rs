// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single planar boundary fitted through its corners.

use nalgebra::{Matrix3xX, Vector2, Vector3};
use smallvec::SmallVec;

use crate::config::Tolerance;
use crate::error::{Error, Result};
use crate::intersection::{Intersection, IntersectionKind};
use crate::kernel::{area_2d_polygon, point_in_polygon, segment_plane_intersection, PolygonSide};

/// Corner storage; most room walls are quadrilaterals.
pub type Corners3 = SmallVec<[Vector3<f64>; 4]>;
pub type Corners2 = SmallVec<[Vector2<f64>; 4]>;

/// A planar, simply-connected polygon in 3D.
///
/// The supporting plane is fitted by SVD of the corners relative to the
/// origin. The in-plane basis is oriented so that the corners run
/// counter-clockwise around the normal, which makes [`SimplePolygon::area`]
/// non-negative.
#[derive(Debug, Clone)]
pub struct SimplePolygon {
    corners: Corners3,
    flat_corners: Corners2,
    origin: Vector3<f64>,
    basis: [Vector3<f64>; 2],
    normal: Vector3<f64>,
    tolerance: Tolerance,
}

impl SimplePolygon {
    /// Fit a polygon through `corners`, using the first corner as origin.
    pub fn new(corners: &[Vector3<f64>], tolerance: Tolerance) -> Result<Self> {
        let origin = *corners.first().ok_or(Error::DegeneratePolygon(0))?;
        Self::with_origin(corners, origin, tolerance)
    }

    /// Fit a polygon through `corners` with an explicit plane origin.
    pub fn with_origin(
        corners: &[Vector3<f64>],
        origin: Vector3<f64>,
        tolerance: Tolerance,
    ) -> Result<Self> {
        if corners.len() < 3 {
            return Err(Error::DegeneratePolygon(corners.len()));
        }

        let centered: Vec<Vector3<f64>> = corners.iter().map(|c| c - origin).collect();
        let svd = Matrix3xX::from_columns(&centered).svd(true, false);
        let u = svd.u.ok_or(Error::DecompositionFailed)?;
        let singular = &svd.singular_values;

        // Descending order; the decomposition does not promise any.
        let mut order = [0usize, 1, 2];
        order.sort_by(|&i, &j| singular[j].total_cmp(&singular[i]));

        // Coplanar corners span at most two dimensions.
        let smallest = singular[order[2]];
        if smallest > tolerance.eps {
            tracing::warn!(
                smallest_singular_value = smallest,
                eps = tolerance.eps,
                corners = corners.len(),
                "Rejecting non-planar polygon"
            );
            return Err(Error::NotPlanar {
                smallest_singular_value: smallest,
                eps: tolerance.eps,
            });
        }

        let mut basis: [Vector3<f64>; 2] = [
            u.column(order[0]).into_owned(),
            u.column(order[1]).into_owned(),
        ];
        let mut flat_corners = flatten(&centered, &basis);

        if area_2d_polygon(&flat_corners) < 0.0 {
            tracing::debug!("Clockwise corners, swapping the in-plane basis");
            basis.swap(0, 1);
            for p in flat_corners.iter_mut() {
                *p = Vector2::new(p.y, p.x);
            }
        }

        let normal = basis[0].cross(&basis[1]);

        Ok(Self {
            corners: corners.iter().copied().collect(),
            flat_corners,
            origin,
            basis,
            normal,
            tolerance,
        })
    }

    /// Area enclosed by the boundary, never negative.
    pub fn area(&self) -> f64 {
        area_2d_polygon(&self.flat_corners)
    }

    pub fn origin(&self) -> Vector3<f64> {
        self.origin
    }

    /// Unit normal; the corners run counter-clockwise around it.
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Orthonormal in-plane basis.
    pub fn basis(&self) -> &[Vector3<f64>; 2] {
        &self.basis
    }

    /// Corners in the order they were given.
    pub fn corners(&self) -> &[Vector3<f64>] {
        &self.corners
    }

    /// Corners expressed in the in-plane basis.
    pub fn flat_corners(&self) -> &[Vector2<f64>] {
        &self.flat_corners
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Coordinates of `p` (projected onto the plane) in the in-plane basis.
    pub fn project(&self, p: &Vector3<f64>) -> Vector2<f64> {
        let rel = p - self.origin;
        Vector2::new(self.basis[0].dot(&rel), self.basis[1].dot(&rel))
    }

    /// Intersect the segment `p1 - p2` with the polygon.
    ///
    /// The crossing with the supporting plane is located first, then
    /// classified against the flattened boundary.
    pub fn intersection(&self, p1: &Vector3<f64>, p2: &Vector3<f64>) -> Option<Intersection<3>> {
        let hit = segment_plane_intersection(p1, p2, &self.origin, &self.normal, &self.tolerance)?;

        match point_in_polygon(&self.project(&hit.point), &self.flat_corners, &self.tolerance) {
            PolygonSide::Outside => None,
            PolygonSide::Inside => Some(hit),
            PolygonSide::Boundary => Some(Intersection::new(
                IntersectionKind::from_flags(hit.kind.is_endpoint(), true),
                hit.point,
            )),
        }
    }

    /// True when both polygons were built from exactly the same corners.
    ///
    /// Coordinates are compared without tolerance: this detects duplicated
    /// input, not congruent shapes.
    pub fn same_as(&self, other: &SimplePolygon) -> bool {
        self.corners == other.corners
    }
}

fn flatten(centered: &[Vector3<f64>], basis: &[Vector3<f64>; 2]) -> Corners2 {
    centered
        .iter()
        .map(|c| Vector2::new(basis[0].dot(c), basis[1].dot(c)))
        .collect()
}
