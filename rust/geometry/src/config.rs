// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric tolerance shared by every geometric test.
//!
//! A single epsilon is used for planarity checks, boundary classification,
//! segment tests and side/reflection thresholds. Surfaces and walls keep the
//! [`Tolerance`] they were built with, so two rooms built with different
//! tolerances never influence each other.

use serde::{Deserialize, Serialize};

use crate::kernel::Side;

/// Default epsilon, suited to coordinates expressed in meters.
pub const DEFAULT_EPS: f64 = 1e-5;

/// Environment variable read by [`Tolerance::from_env`].
pub const EPS_ENV_VAR: &str = "LIBROOM_EPS";

/// Numeric slack used to treat near-zero quantities as exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Distances, singular values and plane parameters below this are zero.
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    /// Create a tolerance with the given epsilon.
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Load the tolerance from the `LIBROOM_EPS` environment variable.
    ///
    /// Missing, unparsable or non-positive values fall back to [`DEFAULT_EPS`].
    pub fn from_env() -> Self {
        match std::env::var(EPS_ENV_VAR) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, default = DEFAULT_EPS, "Ignoring invalid {}", EPS_ENV_VAR);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let eps: f64 = raw.trim().parse().ok()?;
        (eps.is_finite() && eps > 0.0).then_some(Self { eps })
    }

    /// True when `value` lies within `[-eps, eps]`.
    #[inline]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.eps
    }

    /// Three-way sign of `value` with a dead band of width `eps` around zero.
    #[inline]
    pub fn sign(&self, value: f64) -> Side {
        if value > self.eps {
            Side::Positive
        } else if value < -self.eps {
            Side::Negative
        } else {
            Side::OnPlane
        }
    }
}
