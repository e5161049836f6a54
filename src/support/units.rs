//! Extensions to [`uom`].
//!
//! All physical inputs and outputs in this crate are [`uom`] quantities.
//! This module adds what [`uom`] does not ship but conduction models need.
//!
//! ## Heat quantities per geometry
//!
//! The heat a body can release depends on how its size is measured. An
//! infinite plate stores energy per unit face area, an infinite cylinder per
//! unit length, a sphere in total. [`ArealEnergy`] and [`LinearEnergy`] name
//! the first two; the third is plain [`uom::si::f64::Energy`].
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! yields a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_conduction::support::units::TemperatureDifference;
//!
//! let initial = ThermodynamicTemperature::new::<degree_celsius>(300.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let excess = initial.minus(ambient);
//! assert!((excess.get::<delta_kelvin>() - 275.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{ArealEnergy, EnergyDensity, LinearEnergy, VolumetricHeatCapacity};
pub use temperature_difference::TemperatureDifference;
