// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for wall construction and comparison.

/// Result type alias for wall operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or comparing walls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The wall surface could not be built.
    #[error("geometry error: {0}")]
    Geometry(#[from] libroom_geometry::Error),

    /// Absorption and scattering must cover the same frequency bands.
    #[error("the number of absorption ({absorption}) and scattering ({scatter}) coefficients is different")]
    CoefficientMismatch { absorption: usize, scatter: usize },

    /// The corner list cannot describe a wall.
    #[error("invalid wall corners: {0}")]
    InvalidCorners(String),

    /// Walls of different dimensions were mixed.
    #[error("wall dimension mismatch: expected a {expected}D wall, found a {found}D wall")]
    DimensionMismatch { expected: usize, found: usize },
}
