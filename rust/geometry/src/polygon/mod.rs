// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar surfaces: a closed set of polygon variants behind one interface.

pub mod simple;
pub mod with_holes;

use nalgebra::{Vector2, Vector3};

use crate::config::Tolerance;
use crate::error::{Error, Result};
use crate::intersection::Intersection;

pub use simple::SimplePolygon;
pub use with_holes::PolygonWithHole;

/// The geometric part of a 3D wall.
#[derive(Debug, Clone)]
pub enum Polygon {
    Simple(SimplePolygon),
    WithHoles(PolygonWithHole),
}

impl Polygon {
    /// Build the right variant for the input: holes present means
    /// [`Polygon::WithHoles`], otherwise [`Polygon::Simple`].
    pub fn make_polygon(
        corners: &[Vector3<f64>],
        holes: &[Vec<Vector3<f64>>],
        tolerance: Tolerance,
    ) -> Result<Self> {
        if holes.is_empty() {
            SimplePolygon::new(corners, tolerance).map(Polygon::Simple)
        } else {
            PolygonWithHole::new(corners, holes, tolerance).map(Polygon::WithHoles)
        }
    }

    /// Deep copy of an existing surface, keeping its concrete variant.
    pub fn make_polygon_from(existing: &Polygon) -> Self {
        match existing {
            Polygon::Simple(p) => Polygon::Simple(p.clone()),
            Polygon::WithHoles(p) => Polygon::WithHoles(p.clone()),
        }
    }

    /// Name of the concrete variant, for diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Polygon::Simple(_) => "simple polygon",
            Polygon::WithHoles(_) => "polygon with holes",
        }
    }

    pub fn as_simple(&self) -> Result<&SimplePolygon> {
        match self {
            Polygon::Simple(p) => Ok(p),
            other => Err(Error::VariantMismatch {
                expected: "simple polygon",
                found: other.variant_name(),
            }),
        }
    }

    pub fn as_with_holes(&self) -> Result<&PolygonWithHole> {
        match self {
            Polygon::WithHoles(p) => Ok(p),
            other => Err(Error::VariantMismatch {
                expected: "polygon with holes",
                found: other.variant_name(),
            }),
        }
    }

    /// The outer boundary: the polygon itself, or the one the holes are cut from.
    pub fn outer(&self) -> &SimplePolygon {
        match self {
            Polygon::Simple(p) => p,
            Polygon::WithHoles(p) => p.outer(),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Polygon::Simple(p) => p.area(),
            Polygon::WithHoles(p) => p.area(),
        }
    }

    pub fn origin(&self) -> Vector3<f64> {
        self.outer().origin()
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.outer().normal()
    }

    pub fn basis(&self) -> &[Vector3<f64>; 2] {
        self.outer().basis()
    }

    pub fn corners(&self) -> &[Vector3<f64>] {
        self.outer().corners()
    }

    pub fn flat_corners(&self) -> &[Vector2<f64>] {
        self.outer().flat_corners()
    }

    /// Corner lists of the holes, empty for a simple polygon.
    pub fn holes(&self) -> Vec<&[Vector3<f64>]> {
        match self {
            Polygon::Simple(_) => Vec::new(),
            Polygon::WithHoles(p) => p.holes().iter().map(SimplePolygon::corners).collect(),
        }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.outer().tolerance()
    }

    pub fn intersection(&self, p1: &Vector3<f64>, p2: &Vector3<f64>) -> Option<Intersection<3>> {
        match self {
            Polygon::Simple(p) => p.intersection(p1, p2),
            Polygon::WithHoles(p) => p.intersection(p1, p2),
        }
    }

    /// Structural equality. Surfaces of different variants are never equal.
    pub fn same_as(&self, other: &Polygon) -> bool {
        match (self, other) {
            (Polygon::Simple(a), Polygon::Simple(b)) => a.same_as(b),
            (Polygon::WithHoles(a), Polygon::WithHoles(b)) => a.same_as(b),
            _ => false,
        }
    }
}

impl From<SimplePolygon> for Polygon {
    fn from(p: SimplePolygon) -> Self {
        Polygon::Simple(p)
    }
}

impl From<PolygonWithHole> for Polygon {
    fn from(p: PolygonWithHole) -> Self {
        Polygon::WithHoles(p)
    }
}
