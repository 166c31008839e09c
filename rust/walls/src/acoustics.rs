// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-band acoustic coefficients of a wall.

use crate::error::{Error, Result};

/// Absorption and scattering per frequency band, with the reflection factors
/// derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Acoustics {
    absorption: Vec<f64>,
    scatter: Vec<f64>,
    energy_reflection: Vec<f64>,
    transmission: Vec<f64>,
}

impl Acoustics {
    /// Validate the coefficients and derive `1 - a` and `sqrt(1 - a)` per band.
    pub fn new(absorption: Vec<f64>, scatter: Vec<f64>) -> Result<Self> {
        if absorption.len() != scatter.len() {
            return Err(Error::CoefficientMismatch {
                absorption: absorption.len(),
                scatter: scatter.len(),
            });
        }

        let energy_reflection: Vec<f64> = absorption.iter().map(|a| 1.0 - a).collect();
        let transmission = energy_reflection.iter().map(|r| r.sqrt()).collect();

        Ok(Self {
            absorption,
            scatter,
            energy_reflection,
            transmission,
        })
    }

    pub fn absorption(&self) -> &[f64] {
        &self.absorption
    }

    pub fn scatter(&self) -> &[f64] {
        &self.scatter
    }

    /// Fraction of energy reflected per band, `1 - absorption`.
    pub fn energy_reflection(&self) -> &[f64] {
        &self.energy_reflection
    }

    /// Pressure reflection factor per band, `sqrt(1 - absorption)`.
    pub fn transmission(&self) -> &[f64] {
        &self.transmission
    }

    pub fn n_bands(&self) -> usize {
        self.transmission.len()
    }
}
