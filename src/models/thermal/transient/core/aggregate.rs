//! Totals, physical temperatures and heat amounts from the series terms.

use uom::si::f64::ThermodynamicTemperature;

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::{EnergyDensity, TemperatureDifference, VolumetricHeatCapacity},
};

use super::{
    Advisory, CalculationError, CalculationRequest, DimensionlessGroups, HeatAmount,
    SeriesTerm, SolverConfig, geometry::Eigenproblem,
};

/// Summed series and the physical quantities derived from it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Totals {
    pub(crate) center_theta: f64,
    pub(crate) theta: f64,
    pub(crate) heat_sum: f64,
    pub(crate) heat_ratio: Constrained<f64, UnitInterval>,
    pub(crate) temperature: ThermodynamicTemperature,
    pub(crate) max_heat: HeatAmount,
    pub(crate) heat: HeatAmount,
}

/// Sums the terms and converts the sums to physical quantities.
///
/// An insulated body and the initial instant are answered exactly, without
/// relying on the truncated series summing to one.
///
/// # Errors
///
/// Returns [`CalculationError::NonFiniteResult`] if any total is NaN or
/// infinite and [`CalculationError::UnphysicalResult`] if `Q/Q_max` falls
/// outside `[0, 1]`.
pub(crate) fn aggregate<G: Eigenproblem>(
    geometry: &G,
    request: &CalculationRequest,
    groups: &DimensionlessGroups,
    terms: &[SeriesTerm],
    config: &SolverConfig,
    advisories: &mut Vec<Advisory>,
) -> Result<Totals, CalculationError> {
    let fourier = groups.fourier.value();

    let (center_theta, theta, heat_sum) = if groups.biot.value() == 0.0 || fourier == 0.0 {
        (1.0, 1.0, 1.0)
    } else {
        terms.iter().fold((0.0, 0.0, 0.0), |(center, theta, heat), term| {
            (
                center + term.center_theta,
                theta + term.theta,
                heat + term.heat,
            )
        })
    };

    if fourier > 0.0 && fourier < config.fourier_threshold {
        advisories.push(Advisory::FourierBelowThreshold {
            fourier,
            threshold: config.fourier_threshold,
        });
    }

    let center_theta = finite("center_theta", center_theta)?;
    let theta = finite("theta", theta)?;
    let heat_sum = finite("heat_sum", heat_sum)?;

    let ratio = 1.0 - heat_sum;
    let heat_ratio =
        UnitInterval::new(ratio).map_err(|_| CalculationError::UnphysicalResult { ratio })?;

    let excess = request
        .initial_temperature
        .minus(request.ambient_temperature);
    let temperature = request.ambient_temperature + excess * theta;
    finite("temperature", temperature.value)?;

    let capacity: VolumetricHeatCapacity = request.density * request.specific_heat;
    let energy_density: EnergyDensity = capacity * excess;
    let max_heat = geometry.max_heat(groups.characteristic_length, energy_density);
    finite("max_heat", max_heat.si_value())?;

    let heat = max_heat.scaled(ratio);
    finite("heat", heat.si_value())?;

    Ok(Totals {
        center_theta,
        theta,
        heat_sum,
        heat_ratio,
        temperature,
        max_heat,
        heat,
    })
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFiniteResult { quantity, value })
    }
}
