//! Results types for transient conduction calculations.

use std::fmt;

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, Energy, ThermodynamicTemperature},
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::{ArealEnergy, LinearEnergy},
};

use super::{DimensionlessGroups, Eigenvalue, Geometry, SeriesTerm};

/// Outcome of a transient conduction calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Geometry that was solved.
    pub geometry: Geometry,

    /// Biot and Fourier numbers, position and the diffusivity used.
    pub groups: DimensionlessGroups,

    /// Eigenvalues `λ_1 < λ_2 < …`, one per series term.
    pub eigenvalues: Vec<Eigenvalue>,

    /// Per-term contributions, in eigenvalue order.
    pub terms: Vec<SeriesTerm>,

    /// Leading expansion coefficient `A_1`.
    pub dominant_coefficient: f64,

    /// Dimensionless temperature at the center, `θ_o`.
    pub center_theta: f64,

    /// Dimensionless temperature at the requested position, `θ`.
    pub theta: f64,

    /// Sum of the per-term heat contributions, `1 − Q/Q_max`.
    pub heat_sum: f64,

    /// Fraction of the maximum transferable heat already transferred.
    pub heat_ratio: Constrained<f64, UnitInterval>,

    /// Temperature at the requested position.
    pub temperature: ThermodynamicTemperature,

    /// Heat the body would release by reaching the ambient temperature.
    pub max_heat: HeatAmount,

    /// Heat released so far. Negative when the body is heating up.
    pub heat: HeatAmount,

    /// Conditions worth surfacing that did not prevent a result.
    pub advisories: Vec<Advisory>,
}

/// An amount of heat, measured the way the geometry allows.
///
/// Infinite bodies have infinite total energy, so the plate reports heat per
/// unit face area and the cylinder heat per unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatAmount {
    /// Plate, J/m².
    PerUnitArea(ArealEnergy),

    /// Cylinder, J/m.
    PerUnitLength(LinearEnergy),

    /// Sphere, J.
    Total(Energy),
}

impl HeatAmount {
    /// Value in SI base units (J/m², J/m or J).
    #[must_use]
    pub fn si_value(&self) -> f64 {
        match self {
            Self::PerUnitArea(q) => q.value,
            Self::PerUnitLength(q) => q.value,
            Self::Total(q) => q.value,
        }
    }

    /// SI unit symbol of [`si_value`](Self::si_value).
    #[must_use]
    pub fn si_unit(&self) -> &'static str {
        match self {
            Self::PerUnitArea(_) => "J/m²",
            Self::PerUnitLength(_) => "J/m",
            Self::Total(_) => "J",
        }
    }

    /// The same kind of amount, multiplied by `factor`.
    pub(crate) fn scaled(self, factor: f64) -> Self {
        match self {
            Self::PerUnitArea(q) => Self::PerUnitArea(q * factor),
            Self::PerUnitLength(q) => Self::PerUnitLength(q * factor),
            Self::Total(q) => Self::Total(q * factor),
        }
    }
}

/// A non-fatal condition attached to a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// The Fourier number is below the range where a short series is accurate.
    FourierBelowThreshold {
        /// Fourier number of the request.
        fourier: f64,

        /// Configured threshold.
        threshold: f64,
    },

    /// A supplied Biot number was used instead of `h·L_c/k`.
    BiotOverride {
        /// Value supplied and used.
        supplied: f64,

        /// Value computed from the physical inputs.
        computed: f64,
    },

    /// A supplied diffusivity disagrees with `k/(ρ·c)`.
    DiffusivityMismatch {
        /// Value supplied and used.
        supplied: DiffusionCoefficient,

        /// Value derived from the physical inputs.
        derived: DiffusionCoefficient,
    },
}

impl Advisory {
    /// Stable machine-readable code for this advisory.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FourierBelowThreshold { .. } => "fourier_below_threshold",
            Self::BiotOverride { .. } => "biot_override",
            Self::DiffusivityMismatch { .. } => "diffusivity_mismatch",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourierBelowThreshold { fourier, threshold } => write!(
                f,
                "Fo={fourier} is below {threshold}; a truncated series may be inaccurate"
            ),
            Self::BiotOverride { supplied, computed } => write!(
                f,
                "supplied Bi={supplied} used instead of the computed Bi={computed}"
            ),
            Self::DiffusivityMismatch { supplied, derived } => write!(
                f,
                "supplied diffusivity {} m²/s differs from k/(ρc) = {} m²/s",
                supplied.get::<square_meter_per_second>(),
                derived.get::<square_meter_per_second>()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{energy::joule, f64::Energy};

    #[test]
    fn scaling_keeps_the_measure() {
        let max = HeatAmount::Total(Energy::new::<joule>(200.0));
        let heat = max.scaled(0.25);
        assert!(matches!(heat, HeatAmount::Total(_)));
        assert_relative_eq!(heat.si_value(), 50.0);
        assert_eq!(heat.si_unit(), "J");
    }

    #[test]
    fn advisory_codes() {
        let advisory = Advisory::FourierBelowThreshold {
            fourier: 0.05,
            threshold: 0.2,
        };
        assert_eq!(advisory.code(), "fourier_below_threshold");
        assert!(advisory.to_string().contains("0.05"));
    }
}
