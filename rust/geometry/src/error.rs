// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for surface construction.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or inspecting surfaces.
///
/// Degenerate queries (grazing rays, points on a boundary) are not errors;
/// they are reported through [`crate::IntersectionKind`] and [`crate::Side`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The smallest singular value of the centered corners exceeds the tolerance.
    #[error("the corners of the polygon do not lie in a plane (smallest singular value {smallest_singular_value} > {eps})")]
    NotPlanar { smallest_singular_value: f64, eps: f64 },

    /// A polygon needs at least three corners.
    #[error("a polygon needs at least 3 corners, got {0}")]
    DegeneratePolygon(usize),

    /// The singular value decomposition did not produce left singular vectors.
    #[error("plane fitting failed: singular value decomposition did not converge")]
    DecompositionFailed,

    /// A surface was accessed as the wrong concrete variant.
    #[error("expected a {expected} surface, found a {found}")]
    VariantMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
