use std::f64::consts::PI;

use uom::si::f64::Length;

use crate::{models::thermal::transient::core::HeatAmount, support::units::EnergyDensity};

use super::{Eigenproblem, Geometry, alternating, normalized_weights};

/// Below this `λ` the differences in the coefficient formulas cancel badly
/// and their Taylor expansions are used instead.
const SMALL_LAMBDA: f64 = 1e-2;

/// Sphere of radius `L_c`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Sphere;

impl Eigenproblem for Sphere {
    const GEOMETRY: Geometry = Geometry::Sphere;

    /// `±((sin λ/λ − cos λ) − Bi·sin λ/λ)/(1 + Bi)`, which is
    /// `±(sin λ/λ)·(1 − λ·cot λ − Bi)/(1 + Bi)`.
    ///
    /// `sin λ/λ − cos λ` goes to zero like `λ²/3` and is expanded near the
    /// origin, so the first bracket starts at exactly `−Bi/(1 + Bi)`.
    fn characteristic(&self, index: usize, lambda: f64, biot: f64) -> f64 {
        let (lambda_weight, biot_weight) = normalized_weights(biot);
        let excess = if lambda == 0.0 {
            0.0
        } else {
            sin_minus_lambda_cos(lambda) / lambda
        };
        alternating(index) * (lambda_weight * excess - biot_weight * sinc(lambda))
    }

    fn textbook_residual(&self, lambda: f64, biot: f64) -> f64 {
        if lambda == 0.0 {
            return -biot;
        }
        1.0 - lambda / lambda.tan() - biot
    }

    fn bracket(&self, index: usize) -> [f64; 2] {
        #[allow(clippy::cast_precision_loss)]
        let (lo, hi) = ((index - 1) as f64, index as f64);
        [lo * PI, hi * PI]
    }

    fn coefficient(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        4.0 * sin_minus_lambda_cos(lambda) / u_minus_sin_u(2.0 * lambda)
    }

    fn shape(&self, lambda: f64, position: f64) -> f64 {
        sinc(lambda * position)
    }

    fn heat_factor(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        3.0 * sin_minus_lambda_cos(lambda) / lambda.powi(3)
    }

    fn max_heat(&self, lc: Length, energy_density: EnergyDensity) -> HeatAmount {
        HeatAmount::Total(energy_density * (lc * lc * lc) * (4.0 / 3.0 * PI))
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x.sin() / x }
}

/// `sin λ − λ·cos λ`
fn sin_minus_lambda_cos(lambda: f64) -> f64 {
    if lambda.abs() < SMALL_LAMBDA {
        let l2 = lambda * lambda;
        return lambda * l2 * (1.0 / 3.0 - l2 / 30.0 + l2 * l2 / 840.0);
    }
    lambda.sin() - lambda * lambda.cos()
}

/// `u − sin u`
fn u_minus_sin_u(u: f64) -> f64 {
    if u.abs() < 2.0 * SMALL_LAMBDA {
        let u2 = u * u;
        return u * u2 * (1.0 / 6.0 - u2 / 120.0 + u2 * u2 / 5040.0);
    }
    u - u.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unit_biot_root_is_half_pi() {
        // 1 − λ·cot λ = 1 at λ = π/2.
        assert!(Sphere.characteristic(1, PI / 2.0, 1.0).abs() < 1e-15);
        assert_relative_eq!(
            Sphere.coefficient(PI / 2.0),
            1.273_239_544_735_162_8,
            epsilon = 1e-14
        );
    }

    #[test]
    fn expansions_match_direct_formulas_at_crossover() {
        let lambda = SMALL_LAMBDA;
        assert_relative_eq!(
            sin_minus_lambda_cos(lambda * (1.0 - 1e-12)),
            lambda.sin() - lambda * lambda.cos(),
            max_relative = 1e-6
        );
        let u = 2.0 * SMALL_LAMBDA;
        assert_relative_eq!(
            u_minus_sin_u(u * (1.0 - 1e-12)),
            u - u.sin(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn small_biot_coefficient_is_near_one() {
        // λ_1² ≈ 3·Bi and A_1 ≈ 1 + λ_1²/10 for small Bi.
        let biot = 1e-6_f64;
        let lambda = (3.0 * biot).sqrt();
        assert_relative_eq!(Sphere.coefficient(lambda), 1.0 + 0.3 * biot, epsilon = 1e-9);
    }

    #[test]
    fn first_bracket_starts_below_zero_for_tiny_biot() {
        let value = Sphere.characteristic(1, 0.0, 1e-17);
        assert!(value < 0.0);
        assert_relative_eq!(value, -1e-17, max_relative = 1e-12);
    }
}
