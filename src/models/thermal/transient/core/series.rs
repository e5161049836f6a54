//! Per-eigenvalue contributions to the series solution.

use super::{Eigenvalue, geometry::Eigenproblem};

/// The contribution of one eigenvalue to each series sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm {
    /// One-based index `n`.
    pub index: usize,

    /// Expansion coefficient `A_n`.
    pub coefficient: f64,

    /// Contribution to the center temperature, `A_n·exp(−λ_n²·Fo)`.
    pub center_theta: f64,

    /// Contribution to the temperature at the requested position.
    pub theta: f64,

    /// Contribution to `1 − Q/Q_max`.
    pub heat: f64,
}

/// Evaluates every term at Fourier number `fourier` and position `position`.
pub(crate) fn evaluate_terms<G: Eigenproblem>(
    geometry: &G,
    eigenvalues: &[Eigenvalue],
    fourier: f64,
    position: f64,
) -> Vec<SeriesTerm> {
    eigenvalues
        .iter()
        .map(|eigenvalue| {
            let lambda = eigenvalue.value;
            let coefficient = geometry.coefficient(lambda);
            let center_theta = coefficient * (-lambda * lambda * fourier).exp();
            SeriesTerm {
                index: eigenvalue.index,
                coefficient,
                center_theta,
                theta: center_theta * geometry.shape(lambda, position),
                heat: center_theta * geometry.heat_factor(lambda),
            }
        })
        .collect()
}
