// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 3D walls backed by a [`Polygon`].

use nalgebra::{Vector2, Vector3};

use libroom_geometry::{Intersection, Polygon, Tolerance};

use super::{Wall, Wall3D, WallGeometry};
use crate::acoustics::Acoustics;
use crate::error::Result;

impl WallGeometry<3> for Polygon {
    fn origin(&self) -> Vector3<f64> {
        Polygon::origin(self)
    }

    fn normal(&self) -> Vector3<f64> {
        Polygon::normal(self)
    }

    fn area(&self) -> f64 {
        Polygon::area(self)
    }

    fn intersection(&self, p1: &Vector3<f64>, p2: &Vector3<f64>) -> Option<Intersection<3>> {
        Polygon::intersection(self, p1, p2)
    }

    fn corners(&self) -> &[Vector3<f64>] {
        Polygon::corners(self)
    }

    fn holes(&self) -> Vec<&[Vector3<f64>]> {
        Polygon::holes(self)
    }

    fn same_as(&self, other: &Self) -> bool {
        Polygon::same_as(self, other)
    }

    fn tolerance(&self) -> Tolerance {
        Polygon::tolerance(self)
    }
}

impl Wall3D {
    /// Build a 3D wall, cutting out `holes` when any are given.
    ///
    /// Fails when the coefficient lengths differ or when the outer boundary
    /// or a hole is not planar.
    pub fn new(
        corners: &[Vector3<f64>],
        holes: &[Vec<Vector3<f64>>],
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        name: impl Into<String>,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let acoustics = Acoustics::new(absorption, scatter)?;
        let polygon = Polygon::make_polygon(corners, holes, tolerance)?;
        Ok(Wall::from_parts(polygon, acoustics, name))
    }

    /// Build a 3D wall without holes.
    pub fn without_holes(
        corners: &[Vector3<f64>],
        absorption: Vec<f64>,
        scatter: Vec<f64>,
        name: impl Into<String>,
        tolerance: Tolerance,
    ) -> Result<Self> {
        Self::new(corners, &[], absorption, scatter, name, tolerance)
    }

    pub fn polygon(&self) -> &Polygon {
        self.geometry()
    }

    /// In-plane basis of the outer boundary.
    pub fn basis(&self) -> &[Vector3<f64>; 2] {
        self.geometry().basis()
    }

    /// Outer corners in the in-plane basis.
    pub fn flat_corners(&self) -> &[Vector2<f64>] {
        self.geometry().flat_corners()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(x0, y0, 0.0),
            Vector3::new(x0 + size, y0, 0.0),
            Vector3::new(x0 + size, y0 + size, 0.0),
            Vector3::new(x0, y0 + size, 0.0),
        ]
    }

    #[test]
    fn accessors_come_from_polygon() {
        let wall = Wall3D::new(
            &square(0.0, 0.0, 4.0),
            &[square(1.0, 1.0, 1.0)],
            vec![0.2],
            vec![0.1],
            "with window",
            Tolerance::default(),
        )
        .unwrap();

        assert_relative_eq!(wall.area(), 15.0, epsilon = 1e-10);
        assert_eq!(wall.origin(), Vector3::zeros());
        assert_relative_eq!(wall.normal(), Vector3::z(), epsilon = 1e-10);
        assert_eq!(wall.corners(), &square(0.0, 0.0, 4.0)[..]);
        assert_eq!(wall.holes(), vec![&square(1.0, 1.0, 1.0)[..]]);
        assert_eq!(wall.flat_corners().len(), 4);
        assert_relative_eq!(wall.basis()[0].cross(&wall.basis()[1]), wall.normal(), epsilon = 1e-12);
        assert!(wall.polygon().as_with_holes().is_ok());
    }

    #[test]
    fn non_planar_wall_fails() {
        let mut corners = square(0.0, 0.0, 1.0);
        corners[3].z = 1.0;

        let err = Wall3D::without_holes(&corners, vec![0.1], vec![0.1], "", Tolerance::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Geometry(libroom_geometry::Error::NotPlanar { .. })
        ));
    }

    #[test]
    fn coefficients_are_checked_before_geometry() {
        let mut corners = square(0.0, 0.0, 1.0);
        corners[3].z = 1.0;

        let err = Wall3D::without_holes(&corners, vec![0.1], vec![], "", Tolerance::default())
            .unwrap_err();
        assert!(matches!(err, Error::CoefficientMismatch { .. }));
    }

    #[test]
    fn hole_and_no_hole_walls_differ() {
        let holed = Wall3D::new(
            &square(0.0, 0.0, 1.0),
            &[square(0.25, 0.25, 0.5)],
            vec![],
            vec![],
            "",
            Tolerance::default(),
        )
        .unwrap();
        let plain =
            Wall3D::without_holes(&square(0.0, 0.0, 1.0), vec![], vec![], "", Tolerance::default())
                .unwrap();

        assert!(!holed.same_as(&plain));
        assert!(!plain.same_as(&holed));
    }
}
