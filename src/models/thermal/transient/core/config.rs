use serde::{Deserialize, Serialize};
use twine_solvers::equation::bisection;

use super::CalculationRequest;

/// Solver configuration for transient conduction calculations.
///
/// Deserializes from JSON with every field optional, so a deployment only
/// states what it overrides:
///
/// ```
/// use twine_conduction::models::thermal::transient::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(r#"{ "max_terms": 20 }"#).unwrap();
/// assert_eq!(config.max_terms, 20);
/// assert_eq!(config.default_terms, SolverConfig::default().default_terms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum iteration count for each eigenvalue bisection.
    pub max_iters: usize,

    /// Absolute tolerance on the eigenvalue.
    pub lambda_abs_tol: f64,

    /// Relative tolerance on the eigenvalue.
    ///
    /// Needed for high-order roots, where one ulp of `λ` already exceeds any
    /// useful absolute tolerance.
    pub lambda_rel_tol: f64,

    /// Bisection stops early once the characteristic function, which is
    /// already divided by `1 + Bi`, is within this of zero.
    ///
    /// Zero leaves convergence to the `λ` tolerances.
    pub residual_tol: f64,

    /// Largest scaled residual `|g(λ)| / (1 + λ)` accepted for a root, where
    /// `g` is the characteristic function divided by `1 + Bi`.
    pub acceptance_tol: f64,

    /// Biot number from which roots sit at `λ_n = hi·(1 − 1/Bi)`, with `hi`
    /// the upper end of the bracket, instead of being searched for.
    ///
    /// The neglected terms are of order `1/Bi²` relative.
    pub asymptotic_biot: f64,

    /// Fourier number below which a truncated series is flagged as inaccurate.
    pub fourier_threshold: f64,

    /// Relative disagreement between a supplied diffusivity and `k/(ρc)`
    /// tolerated without an advisory.
    pub diffusivity_tolerance: f64,

    /// Term count used when a wire request leaves `iterations` blank.
    pub default_terms: usize,

    /// Largest accepted term count.
    pub max_terms: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            lambda_abs_tol: 1e-13,
            lambda_rel_tol: 1e-14,
            residual_tol: 0.0,
            acceptance_tol: 1e-10,
            asymptotic_biot: 1e10,
            fourier_threshold: 0.2,
            diffusivity_tolerance: 0.01,
            default_terms: CalculationRequest::DEFAULT_TERMS,
            max_terms: 100,
        }
    }
}

impl SolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.lambda_abs_tol,
            x_rel_tol: self.lambda_rel_tol,
            residual_tol: self.residual_tol,
        }
    }
}
