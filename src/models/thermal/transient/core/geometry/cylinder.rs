use std::f64::consts::PI;

use uom::si::f64::Length;

use crate::{
    models::thermal::transient::core::HeatAmount,
    support::{
        special::{bessel_j0, bessel_j0_zero, bessel_j1},
        units::EnergyDensity,
    },
};

use super::{Eigenproblem, Geometry, alternating, normalized_weights};

/// Infinite cylinder of radius `L_c`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Cylinder;

impl Eigenproblem for Cylinder {
    const GEOMETRY: Geometry = Geometry::Cylinder;

    /// `±(λ·J1(λ) − Bi·J0(λ))/(1 + Bi)`, which is
    /// `±J0(λ)·(λ·J1(λ)/J0(λ) − Bi)/(1 + Bi)`.
    fn characteristic(&self, index: usize, lambda: f64, biot: f64) -> f64 {
        let (lambda_weight, biot_weight) = normalized_weights(biot);
        alternating(index)
            * (lambda_weight * lambda * bessel_j1(lambda) - biot_weight * bessel_j0(lambda))
    }

    fn textbook_residual(&self, lambda: f64, biot: f64) -> f64 {
        lambda * bessel_j1(lambda) / bessel_j0(lambda) - biot
    }

    /// Between consecutive zeros of `J0`, starting at zero.
    fn bracket(&self, index: usize) -> [f64; 2] {
        [bessel_j0_zero(index - 1), bessel_j0_zero(index)]
    }

    fn coefficient(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        let j0 = bessel_j0(lambda);
        let j1 = bessel_j1(lambda);
        2.0 / lambda * j1 / (j0 * j0 + j1 * j1)
    }

    fn shape(&self, lambda: f64, position: f64) -> f64 {
        bessel_j0(lambda * position)
    }

    fn heat_factor(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        2.0 * bessel_j1(lambda) / lambda
    }

    /// Per unit length.
    fn max_heat(&self, lc: Length, energy_density: EnergyDensity) -> HeatAmount {
        HeatAmount::PerUnitLength(energy_density * (lc * lc) * PI)
    }
}
