// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An outer boundary with polygonal holes cut out (windows, doors).

use nalgebra::Vector3;

use crate::config::Tolerance;
use crate::error::Result;
use crate::intersection::{Intersection, IntersectionKind};
use crate::polygon::simple::SimplePolygon;

/// Outer [`SimplePolygon`] minus an ordered list of hole polygons.
///
/// Holes are expected to lie inside the outer boundary, to not overlap and to
/// not touch the outer boundary. None of this is checked.
#[derive(Debug, Clone)]
pub struct PolygonWithHole {
    outer: SimplePolygon,
    holes: Vec<SimplePolygon>,
}

impl PolygonWithHole {
    pub fn new(
        corners: &[Vector3<f64>],
        holes: &[Vec<Vector3<f64>>],
        tolerance: Tolerance,
    ) -> Result<Self> {
        let outer = SimplePolygon::new(corners, tolerance)?;
        let holes = holes
            .iter()
            .map(|hole| SimplePolygon::new(hole, tolerance))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { outer, holes })
    }

    pub fn outer(&self) -> &SimplePolygon {
        &self.outer
    }

    pub fn holes(&self) -> &[SimplePolygon] {
        &self.holes
    }

    /// Outer area minus the area of every hole.
    pub fn area(&self) -> f64 {
        let hole_area: f64 = self.holes.iter().map(SimplePolygon::area).sum();
        self.outer.area() - hole_area
    }

    /// Intersect the segment `p1 - p2` with the holed surface.
    ///
    /// A hit strictly inside a hole falls through. Hole edges belong to the
    /// surface and are reported as boundary hits.
    pub fn intersection(&self, p1: &Vector3<f64>, p2: &Vector3<f64>) -> Option<Intersection<3>> {
        let hit = self.outer.intersection(p1, p2)?;

        // Holes never touch the outer boundary.
        if hit.kind.is_boundary() {
            return Some(hit);
        }

        for hole in &self.holes {
            match hole.intersection(p1, p2) {
                Some(h) if h.kind.is_boundary() => return Some(h),
                Some(Intersection {
                    kind: IntersectionKind::Interior | IntersectionKind::SegmentEndpoint,
                    ..
                }) => return None,
                _ => {}
            }
        }

        Some(hit)
    }

    /// Same outer boundary and the same holes in the same order.
    pub fn same_as(&self, other: &PolygonWithHole) -> bool {
        // TODO: holes are compared in stored order; an order-independent
        // match would need a pairing step between the two hole lists.
        self.outer.same_as(&other.outer)
            && self.holes.len() == other.holes.len()
            && self
                .holes
                .iter()
                .zip(&other.holes)
                .all(|(a, b)| a.same_as(b))
    }
}
