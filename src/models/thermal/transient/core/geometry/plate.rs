use std::f64::consts::{FRAC_PI_2, PI};

use uom::si::f64::Length;

use crate::{models::thermal::transient::core::HeatAmount, support::units::EnergyDensity};

use super::{Eigenproblem, Geometry, normalized_weights};

/// Infinite plate of thickness `2·L_c`, convecting on both faces.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Plate;

impl Eigenproblem for Plate {
    const GEOMETRY: Geometry = Geometry::Plate;

    /// `(λ·sin φ − Bi·cos φ)/(1 + Bi)` with `φ = λ − (n − 1)·π`.
    ///
    /// Up to the sign `(−1)^(n − 1)` this is `cos λ·(λ·tan λ − Bi)/(1 + Bi)`.
    /// Measuring `φ` from the start of the bracket makes the lower end
    /// exactly `−Bi/(1 + Bi)`, however small `Bi` is.
    fn characteristic(&self, index: usize, lambda: f64, biot: f64) -> f64 {
        let [lo, _] = self.bracket(index);
        let phi = lambda - lo;
        let (lambda_weight, biot_weight) = normalized_weights(biot);
        lambda_weight * lambda * phi.sin() - biot_weight * phi.cos()
    }

    fn textbook_residual(&self, lambda: f64, biot: f64) -> f64 {
        lambda * lambda.tan() - biot
    }

    fn bracket(&self, index: usize) -> [f64; 2] {
        #[allow(clippy::cast_precision_loss)]
        let lo = (index - 1) as f64 * PI;
        [lo, lo + FRAC_PI_2]
    }

    /// An insulated plate has `λ_n = (n − 1)·π`.
    fn exact_root(&self, index: usize, biot: f64) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        let root = (index - 1) as f64 * PI;
        (biot == 0.0).then_some(root)
    }

    fn coefficient(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        4.0 * lambda.sin() / (2.0 * lambda + (2.0 * lambda).sin())
    }

    fn shape(&self, lambda: f64, position: f64) -> f64 {
        (lambda * position).cos()
    }

    fn heat_factor(&self, lambda: f64) -> f64 {
        if lambda == 0.0 {
            return 1.0;
        }
        lambda.sin() / lambda
    }

    /// Per unit face area, over the full thickness.
    fn max_heat(&self, lc: Length, energy_density: EnergyDensity) -> HeatAmount {
        HeatAmount::PerUnitArea(energy_density * (lc * 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn textbook_coefficient() {
        // Bi = 1
        assert_relative_eq!(
            Plate.coefficient(0.860_333_589_019_378_8),
            1.119_132_008_405_433_5,
            epsilon = 1e-13
        );
    }

    #[test]
    fn lower_end_keeps_its_sign_for_tiny_biot() {
        for index in [2, 14, 53, 100] {
            let [lo, _] = Plate.bracket(index);
            assert_eq!(Plate.characteristic(index, lo, 1e-14), -1e-14 / (1.0 + 1e-14));
        }
    }

    #[test]
    fn insulated_roots_are_multiples_of_pi() {
        assert_eq!(Plate.exact_root(1, 0.0), Some(0.0));
        assert_eq!(Plate.exact_root(3, 0.0), Some(2.0 * PI));
        assert_eq!(Plate.exact_root(2, 0.5), None);
    }

    #[test]
    fn higher_modes_vanish_from_the_energy_balance_when_insulated() {
        // sin(nπ) = 0, so modes n ≥ 2 carry no coefficient.
        assert!(Plate.coefficient(PI).abs() < 1e-15);
        assert!(Plate.heat_factor(2.0 * PI).abs() < 1e-15);
    }
}
