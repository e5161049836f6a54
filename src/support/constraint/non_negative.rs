use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that may be zero but never negative.
///
/// Used for quantities where zero is physically meaningful: an insulated
/// surface has a zero convection coefficient, and a solution evaluated at the
/// initial instant has zero elapsed time.
///
/// ```
/// use twine_conduction::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(0.0).unwrap().into_inner(), 0.0);
/// assert!(NonNegative::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Fails with [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{HeatTransfer, Time},
        heat_transfer::watt_per_square_meter_kelvin,
        time::second,
    };

    #[test]
    fn insulated_surface_is_allowed() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
        assert!(NonNegative::new(h).is_ok());

        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(-10.0);
        assert_eq!(NonNegative::new(h), Err(ConstraintError::Negative));
    }

    #[test]
    fn elapsed_time() {
        let zero = NonNegative::new(Time::new::<second>(0.0)).unwrap();
        assert_eq!(zero.into_inner().get::<second>(), 0.0);

        assert!(NonNegative::new(Time::new::<second>(120.0)).is_ok());
        assert!(NonNegative::new(Time::new::<second>(-1.0)).is_err());
    }
}
