// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric kernel: 2D polygon area and containment, 2D segment/segment and
//! 3D segment/plane intersection.
//!
//! Every near-zero decision goes through the same [`Tolerance`], so a point
//! classified "on the boundary" by one test is never "strictly inside" by
//! another.

use nalgebra::{Vector2, Vector3};

use crate::config::Tolerance;
use crate::intersection::{Intersection, IntersectionKind};

/// Which side of a plane (or oriented line) a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Opposite to the normal.
    Negative,
    /// Within tolerance of the plane.
    OnPlane,
    /// On the side the normal points to.
    Positive,
}

impl Side {
    /// `-1`, `0` or `1`.
    pub fn sign(self) -> i32 {
        match self {
            Side::Negative => -1,
            Side::OnPlane => 0,
            Side::Positive => 1,
        }
    }
}

/// Result of a point-in-polygon test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSide {
    Outside,
    Inside,
    Boundary,
}

#[inline]
fn cross_2d(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed area of a 2D polygon (shoelace formula).
///
/// Positive when the corners run counter-clockwise.
pub fn area_2d_polygon(corners: &[Vector2<f64>]) -> f64 {
    let n = corners.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for i in 0..n {
        let curr = &corners[i];
        let next = &corners[(i + 1) % n];
        twice_area += cross_2d(curr, next);
    }

    twice_area / 2.0
}

/// Orientation of `p` with respect to the directed line `a -> b`.
///
/// The test is done on the signed distance from `p` to the line, so the
/// tolerance keeps the meaning of a length whatever the segment size.
pub fn orientation(
    a: &Vector2<f64>,
    b: &Vector2<f64>,
    p: &Vector2<f64>,
    tol: &Tolerance,
) -> Side {
    let dir = b - a;
    let len = dir.norm();
    let distance = if len > 0.0 {
        cross_2d(&dir, &(p - a)) / len
    } else {
        0.0
    };
    tol.sign(distance)
}

/// Euclidean distance from `p` to the segment `a - b`.
pub fn distance_to_segment(p: &Vector2<f64>, a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Classify a point against a simple 2D polygon.
///
/// Points within `eps` of any edge are on the boundary. Otherwise a
/// horizontal ray is cast towards `+x` and crossings are counted with a
/// half-open rule on `y`, so a ray through a vertex is counted once.
pub fn point_in_polygon(p: &Vector2<f64>, corners: &[Vector2<f64>], tol: &Tolerance) -> PolygonSide {
    let n = corners.len();
    let mut inside = false;

    for i in 0..n {
        let a = &corners[i];
        let b = &corners[(i + 1) % n];

        if distance_to_segment(p, a, b) <= tol.eps {
            return PolygonSide::Boundary;
        }

        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }

    if inside {
        PolygonSide::Inside
    } else {
        PolygonSide::Outside
    }
}

/// Intersect segment `a1 - a2` with segment `b1 - b2`.
///
/// Segment `a` is the probe (a ray piece) and `b` the obstacle. The kind is
/// [`IntersectionKind::SegmentEndpoint`] when an endpoint of `a` touches `b`
/// and [`IntersectionKind::Boundary`] when an endpoint of `b` touches `a`.
/// Collinear and parallel segments do not intersect.
pub fn segment_intersection_2d(
    a1: &Vector2<f64>,
    a2: &Vector2<f64>,
    b1: &Vector2<f64>,
    b2: &Vector2<f64>,
    tol: &Tolerance,
) -> Option<Intersection<2>> {
    let a1a2b1 = orientation(a1, a2, b1, tol);
    let a1a2b2 = orientation(a1, a2, b2, tol);
    if a1a2b1 == a1a2b2 {
        return None;
    }

    let b1b2a1 = orientation(b1, b2, a1, tol);
    let b1b2a2 = orientation(b1, b2, a2, tol);
    if b1b2a1 == b1b2a2 {
        return None;
    }

    let da = a2 - a1;
    let db = b2 - b1;
    let denom = cross_2d(&da, &db);
    if denom == 0.0 {
        return None;
    }

    let t = cross_2d(&(b1 - a1), &db) / denom;
    let point = a1 + da * t;

    let endpoint = b1b2a1 == Side::OnPlane || b1b2a2 == Side::OnPlane;
    let boundary = a1a2b1 == Side::OnPlane || a1a2b2 == Side::OnPlane;

    Some(Intersection::new(
        IntersectionKind::from_flags(endpoint, boundary),
        point,
    ))
}

/// Intersect segment `a1 - a2` with the infinite plane through `origin`
/// with unit `normal`.
///
/// Near-parallel segments and crossings outside the segment report `None`.
/// The kind is [`IntersectionKind::SegmentEndpoint`] when the crossing is
/// within tolerance of either endpoint, [`IntersectionKind::Interior`]
/// otherwise.
pub fn segment_plane_intersection(
    a1: &Vector3<f64>,
    a2: &Vector3<f64>,
    origin: &Vector3<f64>,
    normal: &Vector3<f64>,
    tol: &Tolerance,
) -> Option<Intersection<3>> {
    let dir = a2 - a1;
    let u = normal.dot(&dir);
    if tol.is_zero(u) {
        return None;
    }

    let s = normal.dot(&(origin - a1)) / u;
    if s < -tol.eps || s > 1.0 + tol.eps {
        return None;
    }

    let point = a1 + dir * s;
    let endpoint = s <= tol.eps || s >= 1.0 - tol.eps;

    Some(Intersection::new(
        IntersectionKind::from_flags(endpoint, false),
        point,
    ))
}
