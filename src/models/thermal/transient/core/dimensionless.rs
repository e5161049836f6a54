//! Dimensionless groups of a transient conduction request.
//!
//! The series solution depends on the physical inputs only through three
//! numbers: the Biot number `Bi = h·L_c/k`, the Fourier number
//! `Fo = α·t/L_c²` and the position `x* = distance/L_c`.

use num_traits::Zero;
use uom::si::{
    f64::{DiffusionCoefficient, Length, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

use super::{Advisory, CalculationError, CalculationRequest, SolverConfig};

/// Relative disagreement between a supplied and a computed Biot number
/// below which no advisory is raised.
const BIOT_AGREEMENT: f64 = 1e-9;

/// Biot number, `h·L_c/k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biot(Constrained<Ratio, NonNegative>);

impl Biot {
    /// Creates a Biot number.
    ///
    /// # Errors
    ///
    /// Fails if `value` is negative or NaN.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// The Biot number as a plain float.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

/// Fourier number, `α·t/L_c²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fourier(Constrained<Ratio, NonNegative>);

impl Fourier {
    /// Creates a Fourier number.
    ///
    /// # Errors
    ///
    /// Fails if `value` is negative or NaN.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// The Fourier number as a plain float.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }
}

/// Where the diffusivity used in the Fourier number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusivitySource {
    /// Supplied with the request.
    Supplied,

    /// Derived as `k/(ρ·c)`.
    Derived,
}

/// Where the Biot number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiotSource {
    /// Supplied with the request, overriding `h·L_c/k`.
    Supplied,

    /// Computed as `h·L_c/k`.
    Computed,
}

/// The dimensionless description of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionlessGroups {
    /// Half-thickness of a plate or radius of a cylinder or sphere.
    pub characteristic_length: Length,

    /// Diffusivity used for the Fourier number.
    pub diffusivity: DiffusionCoefficient,

    /// Origin of [`diffusivity`](Self::diffusivity).
    pub diffusivity_source: DiffusivitySource,

    /// Biot number used for the eigenvalues.
    pub biot: Biot,

    /// Origin of [`biot`](Self::biot).
    pub biot_source: BiotSource,

    /// Fourier number.
    pub fourier: Fourier,

    /// Position `x*` from the center, as a fraction of `L_c`.
    pub position: Constrained<f64, UnitInterval>,
}

impl DimensionlessGroups {
    /// Validates a request and reduces it to dimensionless form.
    ///
    /// Conditions that do not prevent a result are pushed onto `advisories`.
    ///
    /// # Errors
    ///
    /// Returns an input error for non-finite, non-positive or negative
    /// inputs and for a position outside the body, or
    /// [`CalculationError::NonFiniteResult`] if a group overflows.
    pub fn build(
        request: &CalculationRequest,
        config: &SolverConfig,
        advisories: &mut Vec<Advisory>,
    ) -> Result<Self, CalculationError> {
        check_finite(request)?;

        let lc = positive(
            "thickness",
            request.geometry.characteristic_length(request.thickness),
        )?;
        let k = positive("conductivity", request.conductivity)?;
        let rho = positive("density", request.density)?;
        let c = positive("specific_heat", request.specific_heat)?;
        let h = non_negative("convection_coefficient", request.convection_coefficient)?;
        let time = non_negative("time", request.time)?;
        let distance = non_negative("distance", request.distance)?;

        let position: Ratio = distance / lc;
        let position = UnitInterval::new(position.get::<ratio>()).map_err(|_| {
            CalculationError::DistanceOutOfRange {
                distance,
                limit: lc,
            }
        })?;

        let derived: DiffusionCoefficient = k / (rho * c);
        let (diffusivity, diffusivity_source) = match request.thermal_diffusivity {
            Some(alpha) if !alpha.is_zero() => {
                let alpha = positive("thermal_diffusivity", alpha)?;
                let mismatch = ((alpha - derived) / derived).get::<ratio>().abs();
                if mismatch > config.diffusivity_tolerance {
                    advisories.push(Advisory::DiffusivityMismatch {
                        supplied: alpha,
                        derived,
                    });
                }
                (alpha, DiffusivitySource::Supplied)
            }
            _ => (derived, DiffusivitySource::Derived),
        };

        let computed: Ratio = h * lc / k;
        let computed = finite("biot", computed.get::<ratio>())?;
        let (biot, biot_source) = match request.biot {
            Some(supplied) if supplied != 0.0 => {
                let supplied = non_negative("biot", supplied)?;
                let disagreement = (supplied - computed).abs() / supplied.max(computed);
                if !h.is_zero() && disagreement > BIOT_AGREEMENT {
                    advisories.push(Advisory::BiotOverride { supplied, computed });
                }
                (supplied, BiotSource::Supplied)
            }
            _ => (computed, BiotSource::Computed),
        };

        let fourier: Ratio = diffusivity * time / (lc * lc);
        let fourier = finite("fourier", fourier.get::<ratio>())?;

        log::debug!(
            "{}: Bi={biot} ({biot_source:?}), Fo={fourier}, x*={}",
            request.geometry,
            position.as_ref()
        );

        Ok(Self {
            characteristic_length: lc,
            diffusivity,
            diffusivity_source,
            biot: Biot::new(biot).map_err(|source| CalculationError::NegativeQuantity {
                quantity: "biot",
                source,
            })?,
            biot_source,
            fourier: Fourier::new(fourier).map_err(|source| {
                CalculationError::NegativeQuantity {
                    quantity: "fourier",
                    source,
                }
            })?,
            position,
        })
    }
}

/// Rejects NaN and infinite inputs before any sign checks run.
fn check_finite(request: &CalculationRequest) -> Result<(), CalculationError> {
    let fields = [
        ("thickness", request.thickness.value),
        (
            "thermal_diffusivity",
            request.thermal_diffusivity.map_or(0.0, |alpha| alpha.value),
        ),
        ("conductivity", request.conductivity.value),
        ("convection_coefficient", request.convection_coefficient.value),
        ("initial_temperature", request.initial_temperature.value),
        ("ambient_temperature", request.ambient_temperature.value),
        ("density", request.density.value),
        ("specific_heat", request.specific_heat.value),
        ("distance", request.distance.value),
        ("time", request.time.value),
        ("biot", request.biot.unwrap_or(0.0)),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CalculationError::InvalidNumber {
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn positive<T: PartialOrd + Zero>(
    quantity: &'static str,
    value: T,
) -> Result<T, CalculationError> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| CalculationError::NonPositiveDimension { quantity, source })
}

fn non_negative<T: PartialOrd + Zero>(
    quantity: &'static str,
    value: T,
) -> Result<T, CalculationError> {
    NonNegative::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| CalculationError::NegativeQuantity { quantity, source })
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFiniteResult { quantity, value })
    }
}
