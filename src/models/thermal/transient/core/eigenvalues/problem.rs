//! Problem formulation for a single eigenvalue search.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};

use crate::models::thermal::transient::core::geometry::Eigenproblem;

/// A characteristic function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CharacteristicPoint {
    pub(super) lambda: f64,
    pub(super) value: f64,
}

/// The characteristic function produced NaN or an infinity.
#[derive(Debug, Clone, Copy, Error)]
#[error("characteristic function is not finite at λ={lambda}")]
pub(super) struct NonFiniteCharacteristic {
    lambda: f64,
}

/// Model adapter exposing the `index`-th characteristic function of `λ`.
///
/// The geometry orients each function to increase through its root, so the
/// solver sees the same sign convention for every index.
pub(super) struct CharacteristicModel<'a, G> {
    geometry: &'a G,
    index: usize,
    biot: f64,
}

impl<'a, G: Eigenproblem> CharacteristicModel<'a, G> {
    pub(super) fn new(geometry: &'a G, index: usize, biot: f64) -> Self {
        Self {
            geometry,
            index,
            biot,
        }
    }
}

impl<G: Eigenproblem> Model for CharacteristicModel<'_, G> {
    type Input = f64;
    type Output = CharacteristicPoint;
    type Error = NonFiniteCharacteristic;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let lambda = *input;
        let value = self.geometry.characteristic(self.index, lambda, self.biot);
        if value.is_finite() {
            Ok(CharacteristicPoint { lambda, value })
        } else {
            Err(NonFiniteCharacteristic { lambda })
        }
    }
}

/// Equation problem whose residual is the characteristic function itself.
pub(super) struct CharacteristicProblem;

impl EquationProblem<1> for CharacteristicProblem {
    type Input = f64;
    type Output = CharacteristicPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.value])
    }
}
