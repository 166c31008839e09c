// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intersection results and their stable integer codes.
//!
//! Ray tracers branch on the code of an intersection: a hit exactly at the end
//! of a ray segment, or exactly on a polygon edge, is handled differently from
//! a clean interior hit.
//!
//! | code | meaning |
//! |------|---------|
//! | `-1` | no intersection |
//! | `0`  | strictly inside the segment and the surface |
//! | `1`  | at an endpoint of the segment |
//! | `2`  | on the boundary of the surface |
//! | `3`  | both of the above |

use nalgebra::SVector;

/// Code reported when there is no intersection.
pub const ISECT_NONE: i32 = -1;

/// Where a segment meets a surface, when it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// Strictly between the segment endpoints and inside the surface.
    Interior,
    /// At one of the segment endpoints.
    SegmentEndpoint,
    /// On the boundary of the surface (an edge of the polygon or of a hole).
    Boundary,
    /// At a segment endpoint that also lies on the boundary.
    EndpointBoundary,
}

impl IntersectionKind {
    /// Combine the two degenerate-case flags into a kind.
    pub fn from_flags(endpoint: bool, boundary: bool) -> Self {
        match (endpoint, boundary) {
            (false, false) => Self::Interior,
            (true, false) => Self::SegmentEndpoint,
            (false, true) => Self::Boundary,
            (true, true) => Self::EndpointBoundary,
        }
    }

    /// Stable integer code: bit 0 is the endpoint flag, bit 1 the boundary flag.
    pub fn code(self) -> i32 {
        match self {
            Self::Interior => 0,
            Self::SegmentEndpoint => 1,
            Self::Boundary => 2,
            Self::EndpointBoundary => 3,
        }
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, Self::SegmentEndpoint | Self::EndpointBoundary)
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary | Self::EndpointBoundary)
    }
}

/// A segment/surface intersection in `D` dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<const D: usize> {
    pub kind: IntersectionKind,
    pub point: SVector<f64, D>,
}

impl<const D: usize> Intersection<D> {
    pub fn new(kind: IntersectionKind, point: SVector<f64, D>) -> Self {
        Self { kind, point }
    }

    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

/// Integer code of an optional intersection, [`ISECT_NONE`] for `None`.
pub fn intersection_code<const D: usize>(result: &Option<Intersection<D>>) -> i32 {
    result.as_ref().map_or(ISECT_NONE, Intersection::<D>::code)
}
