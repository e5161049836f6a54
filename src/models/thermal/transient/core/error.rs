use serde::Serialize;
use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{f64::Length, length::meter};

use crate::support::constraint::ConstraintError;

use super::Geometry;

/// Errors that can occur while computing a transient conduction solution.
///
/// Every error is request-scoped: a failed calculation produces no partial
/// result, and the same request always fails the same way.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// The geometry name is not one of `plate`, `cylinder` or `sphere`.
    #[error("unknown geometry {value:?}: expected plate, cylinder or sphere")]
    InvalidGeometry {
        /// The name as received.
        value: String,
    },

    /// A dimension or material property that must be positive is not.
    #[error("{quantity} must be greater than zero")]
    NonPositiveDimension {
        /// Name of the offending input.
        quantity: &'static str,

        /// How the value failed the check.
        #[source]
        source: ConstraintError,
    },

    /// A quantity that may be zero is negative.
    #[error("{quantity} must not be negative")]
    NegativeQuantity {
        /// Name of the offending input.
        quantity: &'static str,

        /// How the value failed the check.
        #[source]
        source: ConstraintError,
    },

    /// The evaluation point lies outside the body.
    #[error(
        "distance from the center ({} m) exceeds the characteristic length ({} m)",
        .distance.get::<meter>(),
        .limit.get::<meter>()
    )]
    DistanceOutOfRange {
        /// Requested distance from the center.
        distance: Length,

        /// Characteristic length of the body.
        limit: Length,
    },

    /// The requested number of series terms is outside `1..=max`.
    #[error("number of series terms must be between 1 and {max}, got {requested}")]
    InvalidTermCount {
        /// Requested term count.
        requested: usize,

        /// Largest count accepted by the configuration.
        max: usize,
    },

    /// A numeric field could not be read as a finite number.
    #[error("{field} is not a finite number: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,

        /// The value as received.
        value: String,
    },

    /// A root of the characteristic equation was not resolved to the required
    /// accuracy.
    #[error("eigenvalue {index} for {geometry} at Bi={biot} did not converge: residual={residual:e}")]
    EigenvalueConvergence {
        /// Geometry being solved.
        geometry: Geometry,

        /// Biot number of the request.
        biot: f64,

        /// One-based index of the root.
        index: usize,

        /// Iterations performed.
        iters: usize,

        /// Characteristic function value at the best estimate.
        residual: f64,
    },

    /// The root search rejected its bracketing interval.
    #[error("root search for eigenvalue {index} of {geometry} at Bi={biot} failed")]
    RootSearch {
        /// Geometry being solved.
        geometry: Geometry,

        /// Biot number of the request.
        biot: f64,

        /// One-based index of the root.
        index: usize,

        /// Underlying solver error.
        #[source]
        source: bisection::Error,
    },

    /// A computed quantity is NaN or infinite.
    #[error("{quantity} is not finite: {value}")]
    NonFiniteResult {
        /// Name of the computed quantity.
        quantity: &'static str,

        /// The offending value.
        value: f64,
    },

    /// The heat-transfer ratio fell outside `[0, 1]`.
    #[error("heat transfer ratio {ratio} is outside [0, 1]")]
    UnphysicalResult {
        /// The computed `Q/Q_max`.
        ratio: f64,
    },
}

/// Whether an error was caused by the request or by the numerics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The request itself is invalid.
    Input,

    /// The request was valid but the computation failed.
    Numerical,
}

impl CalculationError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGeometry { .. } => "invalid_geometry",
            Self::NonPositiveDimension { .. } => "non_positive_dimension",
            Self::NegativeQuantity { .. } => "negative_quantity",
            Self::DistanceOutOfRange { .. } => "distance_out_of_range",
            Self::InvalidTermCount { .. } => "invalid_term_count",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::EigenvalueConvergence { .. } => "eigenvalue_convergence",
            Self::RootSearch { .. } => "root_search",
            Self::NonFiniteResult { .. } => "non_finite_result",
            Self::UnphysicalResult { .. } => "unphysical_result",
        }
    }

    /// Classifies the error as an input or a numerical failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidGeometry { .. }
            | Self::NonPositiveDimension { .. }
            | Self::NegativeQuantity { .. }
            | Self::DistanceOutOfRange { .. }
            | Self::InvalidTermCount { .. }
            | Self::InvalidNumber { .. } => ErrorKind::Input,
            Self::EigenvalueConvergence { .. }
            | Self::RootSearch { .. }
            | Self::NonFiniteResult { .. }
            | Self::UnphysicalResult { .. } => ErrorKind::Numerical,
        }
    }

    /// HTTP status a service should answer with.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self.kind() {
            ErrorKind::Input => 400,
            ErrorKind::Numerical => 422,
        }
    }
}
