//! The three body shapes and their eigenfunction expansions.
//!
//! Each geometry is a zero-sized marker implementing [`Eigenproblem`], the
//! complete set of functions the series solution needs: the characteristic
//! equation and its root brackets, the expansion coefficients, the spatial
//! mode shape, the heat-transfer factor and the stored-energy convention.
//! The orchestrator matches on [`Geometry`] once and runs the rest of the
//! pipeline generically.

mod cylinder;
mod plate;
mod sphere;

pub(crate) use cylinder::Cylinder;
pub(crate) use plate::Plate;
pub(crate) use sphere::Sphere;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::support::units::EnergyDensity;

use super::{CalculationError, HeatAmount};

/// Shape of the conducting body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Infinite plate of finite thickness, cooled on both faces.
    Plate,

    /// Infinite cylinder, characterized by its radius.
    Cylinder,

    /// Sphere, characterized by its radius.
    Sphere,
}

impl Geometry {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
        }
    }

    /// Characteristic length `L_c` for a given size input.
    ///
    /// For the plate `size` is the full thickness and `L_c` is half of it.
    /// For the cylinder and sphere `size` is already the radius.
    #[must_use]
    pub fn characteristic_length(self, size: Length) -> Length {
        match self {
            Self::Plate => size / 2.0,
            Self::Cylinder | Self::Sphere => size,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = CalculationError;

    /// Parses a geometry name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plate" => Ok(Self::Plate),
            "cylinder" => Ok(Self::Cylinder),
            "sphere" => Ok(Self::Sphere),
            _ => Err(CalculationError::InvalidGeometry {
                value: s.to_owned(),
            }),
        }
    }
}

/// Per-geometry functions of the one-term-and-beyond series solution.
///
/// Every function takes dimensionless arguments. The `λ → 0` and `x* → 0`
/// limits of [`coefficient`](Self::coefficient), [`shape`](Self::shape) and
/// [`heat_factor`](Self::heat_factor) are all exactly one and implementations
/// evaluate them without dividing by zero.
pub(crate) trait Eigenproblem {
    /// The geometry this function set belongs to.
    const GEOMETRY: Geometry;

    /// Pole-free characteristic function for the `index`-th eigenvalue.
    ///
    /// Divided by `1 + Bi`, so it stays of order one for any Biot number, and
    /// oriented so it is negative at the lower end of the `index`-th
    /// [`bracket`](Self::bracket) and positive at the upper end. It changes
    /// sign exactly once in between.
    fn characteristic(&self, index: usize, lambda: f64, biot: f64) -> f64;

    /// Residual of the characteristic equation in its textbook form.
    ///
    /// Reported alongside each eigenvalue; not used for the root search.
    fn textbook_residual(&self, lambda: f64, biot: f64) -> f64;

    /// Interval containing the `index`-th eigenvalue for every `Bi > 0`.
    fn bracket(&self, index: usize) -> [f64; 2];

    /// Eigenvalues known in closed form, if any.
    ///
    /// The insulated body (`Bi = 0`) always has `λ_1 = 0`.
    fn exact_root(&self, index: usize, biot: f64) -> Option<f64> {
        (index == 1 && biot == 0.0).then_some(0.0)
    }

    /// Expansion coefficient `A_n` for eigenvalue `λ`.
    fn coefficient(&self, lambda: f64) -> f64;

    /// Mode shape at dimensionless position `x*`.
    fn shape(&self, lambda: f64, position: f64) -> f64;

    /// Factor turning a center contribution into a heat contribution.
    fn heat_factor(&self, lambda: f64) -> f64;

    /// Maximum transferable heat for a body of characteristic length `lc`
    /// storing `energy_density` relative to the ambient.
    fn max_heat(&self, lc: Length, energy_density: EnergyDensity) -> HeatAmount;
}

/// Weights `(1/(1 + Bi), Bi/(1 + Bi))` of the two terms of a normalized
/// characteristic function.
fn normalized_weights(biot: f64) -> (f64, f64) {
    let scale = 1.0 + biot;
    (1.0 / scale, biot / scale)
}

/// `(−1)^(n − 1)`
fn alternating(index: usize) -> f64 {
    if index % 2 == 1 { 1.0 } else { -1.0 }
}
