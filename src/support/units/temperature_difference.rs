use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// [`uom`] does not implement `ThermodynamicTemperature - ThermodynamicTemperature`
/// (see [#380](https://github.com/iliekturtles/uom/issues/380)), yet the
/// excess temperature `T_i - T_∞` is the scale of every transient
/// conduction solution. This trait fills the gap.
pub trait TemperatureDifference {
    /// Returns the temperature interval `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
