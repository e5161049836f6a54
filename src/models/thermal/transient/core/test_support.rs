use uom::si::{
    f64::{
        HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{CalculationRequest, DimensionlessGroups, Geometry, SolverConfig};

/// A 0.1 m steel body quenched from 300 °C in 25 °C oil after five minutes.
///
/// `Bi = 0.5` for the plate and `Bi = 1` for the cylinder and sphere.
pub(crate) fn steel_request(geometry: Geometry) -> CalculationRequest {
    CalculationRequest {
        geometry,
        thickness: Length::new::<meter>(0.1),
        thermal_diffusivity: None,
        conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
        convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
        initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(300.0),
        ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(7800.0),
        specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(500.0),
        distance: Length::new::<meter>(0.0),
        time: Time::new::<second>(300.0),
        terms: CalculationRequest::DEFAULT_TERMS,
        biot: None,
    }
}

/// A request whose dimensionless groups are exactly the given values.
///
/// Unit properties and `L_c = 1 m` make `h` equal to `Bi`, `t` equal to
/// `Fo` and `distance` equal to `x*`. The body cools from 100 °C to 0 °C.
pub(crate) fn dimensionless_request(
    geometry: Geometry,
    biot: f64,
    fourier: f64,
    position: f64,
) -> CalculationRequest {
    let size = match geometry {
        Geometry::Plate => 2.0,
        Geometry::Cylinder | Geometry::Sphere => 1.0,
    };
    CalculationRequest {
        geometry,
        thickness: Length::new::<meter>(size),
        thermal_diffusivity: None,
        conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
        convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(biot),
        initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(100.0),
        ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(1.0),
        specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1.0),
        distance: Length::new::<meter>(position),
        time: Time::new::<second>(fourier),
        terms: CalculationRequest::DEFAULT_TERMS,
        biot: None,
    }
}

pub(crate) fn groups_for(request: &CalculationRequest) -> DimensionlessGroups {
    DimensionlessGroups::build(request, &SolverConfig::default(), &mut Vec::new())
        .expect("test request should be valid")
}
