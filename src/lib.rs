//! # Twine Conduction
//!
//! Transient heat conduction models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The centerpiece is the classical Heisler/Gröber solution for one-dimensional
//! transient conduction with a convective boundary: a body at a uniform initial
//! temperature is exposed to a fluid at another temperature, and the
//! temperature at any point and the heat exchanged so far are given by a
//! truncated eigenfunction series. Three geometries are supported: the
//! infinite plate, the infinite cylinder and the sphere.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their wire formats.
//! - [`support`]: numeric constraints, unit extensions and special functions.
//!
//! ## Example
//!
//! ```
//! use twine_conduction::models::thermal::transient::{
//!     CalculationRequest, Geometry, TransientConduction,
//! };
//! use twine_core::Model;
//!
//! use uom::si::{
//!     f64::{
//!         HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
//!         ThermodynamicTemperature, Time,
//!     },
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     time::second,
//! };
//!
//! // A 25 mm radius sphere of water-like material cooling in air.
//! let request = CalculationRequest {
//!     geometry: Geometry::Sphere,
//!     thickness: Length::new::<meter>(0.025),
//!     thermal_diffusivity: None,
//!     conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.6),
//!     convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(150.0),
//!     initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(90.0),
//!     ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
//!     specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
//!     distance: Length::new::<meter>(0.0),
//!     time: Time::new::<second>(1800.0),
//!     terms: CalculationRequest::DEFAULT_TERMS,
//!     biot: None,
//! };
//!
//! let result = TransientConduction::default().call(&request).unwrap();
//! assert!(result.theta < 1.0);
//! assert!(result.heat_ratio.into_inner() > 0.0);
//! ```

pub mod models;
pub mod support;
