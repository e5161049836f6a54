use uom::si::f64::{
    DiffusionCoefficient, HeatTransfer, Length, MassDensity, SpecificHeatCapacity,
    ThermalConductivity, ThermodynamicTemperature, Time,
};

use super::Geometry;

/// Physical description of a transient conduction problem.
///
/// A body at a uniform `initial_temperature` is suddenly exposed to a fluid
/// at `ambient_temperature`. The request asks for the temperature at
/// `distance` from the center after `time` has elapsed.
///
/// Values are checked when the calculation runs, not on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    /// Body shape.
    pub geometry: Geometry,

    /// Full thickness of a plate, or radius of a cylinder or sphere.
    pub thickness: Length,

    /// Thermal diffusivity `α`.
    ///
    /// When `None` it is derived as `k/(ρ·c)`.
    pub thermal_diffusivity: Option<DiffusionCoefficient>,

    /// Thermal conductivity `k` of the body.
    pub conductivity: ThermalConductivity,

    /// Convection coefficient `h` at the surface.
    pub convection_coefficient: HeatTransfer,

    /// Uniform temperature of the body at `t = 0`.
    pub initial_temperature: ThermodynamicTemperature,

    /// Fluid temperature.
    pub ambient_temperature: ThermodynamicTemperature,

    /// Density `ρ` of the body.
    pub density: MassDensity,

    /// Specific heat `c` of the body.
    pub specific_heat: SpecificHeatCapacity,

    /// Distance of the evaluation point from the center plane or axis.
    pub distance: Length,

    /// Elapsed time since exposure.
    pub time: Time,

    /// Number of series terms to sum.
    pub terms: usize,

    /// Biot number to use instead of `h·L_c/k`.
    pub biot: Option<f64>,
}

impl CalculationRequest {
    /// Number of series terms in the classical Heisler/Gröber charts.
    pub const DEFAULT_TERMS: usize = 3;
}
