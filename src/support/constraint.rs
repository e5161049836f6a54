//! Numeric invariants checked once, at construction.
//!
//! Physical inputs to a conduction model carry sign and range requirements:
//! a slab thickness must be strictly positive, a convection coefficient may be
//! zero but never negative, a heat-transfer ratio lives in `[0, 1]`.
//! [`Constrained<T, C>`] pairs a value with a zero-sized marker `C` that
//! states the requirement, so downstream code can rely on it without
//! re-checking.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonNegative`]: zero or greater
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1`
//!
//! Each marker offers a `new()` shortcut, e.g. `StrictlyPositive::new(0.05)`.
//!
//! Markers work for plain numbers and for [`uom`] quantities alike:
//!
//! ```
//! use twine_conduction::support::constraint::{NonNegative, StrictlyPositive};
//! use uom::si::{f64::Length, length::meter};
//!
//! let thickness = StrictlyPositive::new(Length::new::<meter>(0.04)).unwrap();
//! assert_eq!(thickness.as_ref().get::<meter>(), 0.04);
//!
//! assert!(NonNegative::new(0.0).is_ok());
//! assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
//! ```
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a new
//! marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric requirement that can be checked against a value of type `T`.
pub trait Constraint<T> {
    /// Checks that `value` satisfies the requirement.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how the value falls short.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value of type `T` known to satisfy constraint `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the wrapped value, discarding the guarantee.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
