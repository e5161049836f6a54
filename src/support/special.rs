//! Special functions used by curved-geometry conduction solutions.
//!
//! The infinite cylinder's eigenfunctions are Bessel functions of the first
//! kind. This module provides [`bessel_j0`], [`bessel_j1`] and the positive
//! zeros of `J0` ([`bessel_j0_zero`]). The functions are accurate to about
//! `1e-15` absolute: a power series near the origin, Miller's backward
//! recurrence at moderate arguments and Hankel's expansion beyond.
//!
//! ```
//! use twine_conduction::support::special::{bessel_j0, bessel_j0_zero};
//!
//! let first_zero = bessel_j0_zero(1);
//! assert!((first_zero - 2.404_825_557_695_773).abs() < 1e-12);
//! assert!(bessel_j0(first_zero).abs() < 1e-15);
//! ```

mod bessel;

pub use bessel::{bessel_j0, bessel_j0_zero, bessel_j1};
