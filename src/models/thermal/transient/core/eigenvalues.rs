//! Eigenvalues of the characteristic equation.
//!
//! Each root `λ_n` lies alone in the `n`-th bracket of its geometry, so the
//! roots are found one bracket at a time with bisection on the pole-free
//! form of the characteristic function.

mod cache;
mod problem;

pub use cache::EigenvalueCache;

use twine_solvers::equation::bisection;

use super::{CalculationError, SolverConfig, geometry::Eigenproblem};

use problem::{CharacteristicModel, CharacteristicProblem};

/// A root of the characteristic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigenvalue {
    /// One-based index `n`.
    pub index: usize,

    /// The root `λ_n`.
    pub value: f64,

    /// Residual of the textbook form of the characteristic equation at `λ_n`.
    pub residual: f64,

    /// Bisection iterations spent on this root. Zero for closed-form roots.
    pub iters: usize,
}

/// Finds the first `count` eigenvalues for a given Biot number.
///
/// # Errors
///
/// Returns [`CalculationError::RootSearch`] if the solver rejects a bracket
/// and [`CalculationError::EigenvalueConvergence`] if a root is not resolved
/// to the configured accuracy or does not land above the previous root in
/// its own bracket.
pub(crate) fn solve_eigenvalues<G: Eigenproblem>(
    geometry: &G,
    biot: f64,
    count: usize,
    config: &SolverConfig,
) -> Result<Vec<Eigenvalue>, CalculationError> {
    let mut eigenvalues: Vec<Eigenvalue> = Vec::with_capacity(count);
    for index in 1..=count {
        let bracket = geometry.bracket(index);
        let eigenvalue = find_root(geometry, biot, index, bracket, config)?;
        let previous = eigenvalues.last().map(|e| e.value);
        check_placement::<G>(&eigenvalue, biot, bracket, previous)?;
        eigenvalues.push(eigenvalue);
    }
    Ok(eigenvalues)
}

fn find_root<G: Eigenproblem>(
    geometry: &G,
    biot: f64,
    index: usize,
    bracket: [f64; 2],
    config: &SolverConfig,
) -> Result<Eigenvalue, CalculationError> {
    if let Some(value) = geometry.exact_root(index, biot) {
        return Ok(Eigenvalue {
            index,
            value,
            residual: geometry.textbook_residual(value, biot),
            iters: 0,
        });
    }

    if biot >= config.asymptotic_biot {
        let [_, hi] = bracket;
        let value = hi - hi / biot;
        return Ok(Eigenvalue {
            index,
            value,
            residual: geometry.textbook_residual(value, biot),
            iters: 0,
        });
    }

    let model = CharacteristicModel::new(geometry, index, biot);

    let solution = bisection::solve(
        &model,
        &CharacteristicProblem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Only reachable through a non-finite Biot number, which
            // validation rejects upstream.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )
    .map_err(|source| CalculationError::RootSearch {
        geometry: G::GEOMETRY,
        biot,
        index,
        source,
    })?;

    let point = solution.snapshot.output;
    let scaled = point.value.abs() / (1.0 + point.lambda);

    if solution.status != bisection::Status::Converged || !(scaled <= config.acceptance_tol) {
        return Err(CalculationError::EigenvalueConvergence {
            geometry: G::GEOMETRY,
            biot,
            index,
            iters: solution.iters,
            residual: point.value,
        });
    }

    log::trace!(
        "{} λ_{index} = {} after {} iterations (Bi={biot})",
        G::GEOMETRY,
        point.lambda,
        solution.iters
    );

    Ok(Eigenvalue {
        index,
        value: point.lambda,
        residual: geometry.textbook_residual(point.lambda, biot),
        iters: solution.iters,
    })
}

/// Rejects a root outside its bracket or not above the previous root.
fn check_placement<G: Eigenproblem>(
    eigenvalue: &Eigenvalue,
    biot: f64,
    [lo, hi]: [f64; 2],
    previous: Option<f64>,
) -> Result<(), CalculationError> {
    let value = eigenvalue.value;
    let in_bracket = lo <= value && value <= hi;
    let increasing = previous.is_none_or(|previous| value > previous);

    if in_bracket && increasing {
        return Ok(());
    }

    log::debug!(
        "{} λ_{} = {value} rejected: bracket [{lo}, {hi}], previous {previous:?}",
        G::GEOMETRY,
        eigenvalue.index
    );

    Err(CalculationError::EigenvalueConvergence {
        geometry: G::GEOMETRY,
        biot,
        index: eigenvalue.index,
        iters: eigenvalue.iters,
        residual: eigenvalue.residual,
    })
}
