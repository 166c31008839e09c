// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walls whose dimension is only known at runtime.

use nalgebra::SVector;

use libroom_geometry::Tolerance;

use crate::acoustics::Acoustics;
use crate::descriptor::WallDescriptor;
use crate::error::{Error, Result};
use crate::wall::{Wall2D, Wall3D};

/// A 2D or a 3D wall.
#[derive(Debug, Clone)]
pub enum AnyWall {
    TwoD(Wall2D),
    ThreeD(Wall3D),
}

impl AnyWall {
    /// Build a wall from its description, inferring the dimension from the
    /// first corner.
    pub fn from_descriptor(desc: &WallDescriptor, tolerance: Tolerance) -> Result<Self> {
        let dim = desc
            .dim()
            .ok_or_else(|| Error::InvalidCorners("a wall needs corners".to_string()))?;

        match dim {
            2 => {
                if !desc.holes.is_empty() {
                    return Err(Error::InvalidCorners(
                        "holes are only supported on 3D walls".to_string(),
                    ));
                }
                let corners = points::<2>(&desc.corners)?;
                Wall2D::new(
                    &corners,
                    desc.absorption.clone(),
                    desc.scatter.clone(),
                    desc.name.as_str(),
                    tolerance,
                )
                .map(AnyWall::TwoD)
            }
            3 => {
                let corners = points::<3>(&desc.corners)?;
                let holes = desc
                    .holes
                    .iter()
                    .map(|hole| points::<3>(hole))
                    .collect::<Result<Vec<_>>>()?;
                Wall3D::new(
                    &corners,
                    &holes,
                    desc.absorption.clone(),
                    desc.scatter.clone(),
                    desc.name.as_str(),
                    tolerance,
                )
                .map(AnyWall::ThreeD)
            }
            d => Err(Error::InvalidCorners(format!(
                "walls are 2D or 3D, got {d} coordinates per corner"
            ))),
        }
    }

    /// Description that rebuilds this wall.
    pub fn descriptor(&self) -> WallDescriptor {
        let (corners, holes) = match self {
            AnyWall::TwoD(w) => (raw(w.corners()), Vec::new()),
            AnyWall::ThreeD(w) => (
                raw(w.corners()),
                w.holes().into_iter().map(raw).collect(),
            ),
        };

        WallDescriptor {
            corners,
            holes,
            absorption: self.absorption().to_vec(),
            scatter: self.scatter().to_vec(),
            name: self.name().to_string(),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            AnyWall::TwoD(_) => 2,
            AnyWall::ThreeD(_) => 3,
        }
    }

    pub fn as_2d(&self) -> Result<&Wall2D> {
        match self {
            AnyWall::TwoD(w) => Ok(w),
            other => Err(Error::DimensionMismatch {
                expected: 2,
                found: other.dim(),
            }),
        }
    }

    pub fn as_3d(&self) -> Result<&Wall3D> {
        match self {
            AnyWall::ThreeD(w) => Ok(w),
            other => Err(Error::DimensionMismatch {
                expected: 3,
                found: other.dim(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyWall::TwoD(w) => w.name(),
            AnyWall::ThreeD(w) => w.name(),
        }
    }

    pub fn acoustics(&self) -> &Acoustics {
        match self {
            AnyWall::TwoD(w) => w.acoustics(),
            AnyWall::ThreeD(w) => w.acoustics(),
        }
    }

    pub fn absorption(&self) -> &[f64] {
        self.acoustics().absorption()
    }

    pub fn scatter(&self) -> &[f64] {
        self.acoustics().scatter()
    }

    pub fn transmission(&self) -> &[f64] {
        self.acoustics().transmission()
    }

    pub fn energy_reflection(&self) -> &[f64] {
        self.acoustics().energy_reflection()
    }

    pub fn n_bands(&self) -> usize {
        self.acoustics().n_bands()
    }

    pub fn area(&self) -> f64 {
        match self {
            AnyWall::TwoD(w) => w.area(),
            AnyWall::ThreeD(w) => w.area(),
        }
    }

    /// Structural equality of two walls of the same dimension.
    ///
    /// Comparing a 2D wall with a 3D wall is a caller error.
    pub fn same_as(&self, other: &AnyWall) -> Result<bool> {
        match (self, other) {
            (AnyWall::TwoD(a), AnyWall::TwoD(b)) => Ok(a.same_as(b)),
            (AnyWall::ThreeD(a), AnyWall::ThreeD(b)) => Ok(a.same_as(b)),
            _ => {
                tracing::warn!(
                    left = self.dim(),
                    right = other.dim(),
                    "The two walls are not of the same dimensions"
                );
                Err(Error::DimensionMismatch {
                    expected: self.dim(),
                    found: other.dim(),
                })
            }
        }
    }
}

impl From<Wall2D> for AnyWall {
    fn from(w: Wall2D) -> Self {
        AnyWall::TwoD(w)
    }
}

impl From<Wall3D> for AnyWall {
    fn from(w: Wall3D) -> Self {
        AnyWall::ThreeD(w)
    }
}

fn points<const D: usize>(raw: &[Vec<f64>]) -> Result<Vec<SVector<f64, D>>> {
    raw.iter()
        .enumerate()
        .map(|(i, c)| {
            if c.len() == D {
                Ok(SVector::<f64, D>::from_column_slice(c))
            } else {
                Err(Error::InvalidCorners(format!(
                    "corner {i} has {} coordinates, expected {D}",
                    c.len()
                )))
            }
        })
        .collect()
}

fn raw<const D: usize>(points: &[SVector<f64, D>]) -> Vec<Vec<f64>> {
    points.iter().map(|p| p.iter().copied().collect()).collect()
}
