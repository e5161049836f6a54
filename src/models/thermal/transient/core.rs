//! Series solutions of one-dimensional transient conduction.
//!
//! A body at uniform temperature `T_i` is exposed at `t = 0` to a fluid at
//! `T_∞` through a convection coefficient `h`. The dimensionless temperature
//! `θ = (T − T_∞)/(T_i − T_∞)` is the eigenfunction series
//!
//! ```text
//! θ(x*, Fo) = Σ A_n · exp(−λ_n² · Fo) · X(λ_n · x*)
//! ```
//!
//! where the eigenvalues `λ_n` are the roots of a geometry-specific
//! characteristic equation in `λ` and the Biot number, and `X` is the mode
//! shape (`cos`, `J0` or `sin(z)/z`). Truncating it after a few terms gives
//! the classical Heisler/Gröber charts.
//!
//! A calculation runs in a fixed sequence:
//!
//! 1. the term count is validated,
//! 2. the request is reduced to `Bi`, `Fo` and `x*` ([`DimensionlessGroups`]),
//! 3. the first `N` eigenvalues are found, optionally through an
//!    [`EigenvalueCache`],
//! 4. each eigenvalue is turned into a [`SeriesTerm`],
//! 5. the terms are summed and converted to temperatures and heat amounts.
//!
//! Each step either succeeds or ends the calculation with a single
//! [`CalculationError`].

mod aggregate;
mod config;
mod dimensionless;
mod eigenvalues;
mod error;
mod geometry;
mod request;
mod results;
mod series;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::SolverConfig;
pub use dimensionless::{Biot, BiotSource, DiffusivitySource, DimensionlessGroups, Fourier};
pub use eigenvalues::{Eigenvalue, EigenvalueCache};
pub use error::{CalculationError, ErrorKind};
pub use geometry::Geometry;
pub use request::CalculationRequest;
pub use results::{Advisory, CalculationResult, HeatAmount};
pub use series::SeriesTerm;

use aggregate::aggregate;
use eigenvalues::solve_eigenvalues;
use geometry::{Cylinder, Eigenproblem, Plate, Sphere};
use series::evaluate_terms;

/// Computes the temperature and heat transfer described by `request`.
///
/// When a `cache` is given, eigenvalue sets are looked up and published
/// there. Results are identical with and without a cache.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidTermCount`] before any other check if
/// `request.terms` is zero or above [`SolverConfig::max_terms`], an input
/// error for invalid physical values, or a numerical error if the series
/// cannot be evaluated.
pub fn calculate(
    request: &CalculationRequest,
    config: &SolverConfig,
    cache: Option<&EigenvalueCache>,
) -> Result<CalculationResult, CalculationError> {
    if !(1..=config.max_terms).contains(&request.terms) {
        return Err(CalculationError::InvalidTermCount {
            requested: request.terms,
            max: config.max_terms,
        });
    }

    match request.geometry {
        Geometry::Plate => run(&Plate, request, config, cache),
        Geometry::Cylinder => run(&Cylinder, request, config, cache),
        Geometry::Sphere => run(&Sphere, request, config, cache),
    }
}

fn run<G: Eigenproblem>(
    geometry: &G,
    request: &CalculationRequest,
    config: &SolverConfig,
    cache: Option<&EigenvalueCache>,
) -> Result<CalculationResult, CalculationError> {
    let mut advisories = Vec::new();
    let groups = DimensionlessGroups::build(request, config, &mut advisories)?;

    let biot = groups.biot.value();
    let count = request.terms;
    let eigenvalues = match cache {
        Some(cache) => cache
            .get_or_try_insert_with(G::GEOMETRY, biot, count, || {
                solve_eigenvalues(geometry, biot, count, config)
            })?
            .to_vec(),
        None => solve_eigenvalues(geometry, biot, count, config)?,
    };

    let terms = evaluate_terms(
        geometry,
        &eigenvalues,
        groups.fourier.value(),
        groups.position.into_inner(),
    );
    let totals = aggregate(geometry, request, &groups, &terms, config, &mut advisories)?;

    for advisory in &advisories {
        log::warn!("{}: {advisory}", G::GEOMETRY);
    }
    log::debug!(
        "{}: θ={} θ_o={} Q/Q_max={} with {count} terms",
        G::GEOMETRY,
        totals.theta,
        totals.center_theta,
        totals.heat_ratio.as_ref()
    );

    Ok(CalculationResult {
        geometry: G::GEOMETRY,
        groups,
        dominant_coefficient: terms.first().map_or(1.0, |term| term.coefficient),
        eigenvalues,
        terms,
        center_theta: totals.center_theta,
        theta: totals.theta,
        heat_sum: totals.heat_sum,
        heat_ratio: totals.heat_ratio,
        temperature: totals.temperature,
        max_heat: totals.max_heat,
        heat: totals.heat,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatTransfer, Length, ThermodynamicTemperature},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        thermodynamic_temperature::degree_celsius,
    };

    use super::test_support::{dimensionless_request, steel_request};

    const GEOMETRIES: [Geometry; 3] = [Geometry::Plate, Geometry::Cylinder, Geometry::Sphere];

    fn solve(request: &CalculationRequest) -> CalculationResult {
        calculate(request, &SolverConfig::default(), None).unwrap()
    }

    fn theta(geometry: Geometry, biot: f64, fourier: f64, position: f64, terms: usize) -> f64 {
        let mut request = dimensionless_request(geometry, biot, fourier, position);
        request.terms = terms;
        solve(&request).theta
    }

    #[test]
    fn plate_reference_case() {
        let result = solve(&dimensionless_request(Geometry::Plate, 1.0, 0.5, 0.0));

        let lambda_1 = result.eigenvalues[0].value;
        assert_relative_eq!(lambda_1, 0.8603, epsilon = 1e-4);
        assert_relative_eq!(result.dominant_coefficient, 1.1191, epsilon = 1e-4);

        let one_term = result.dominant_coefficient * (-lambda_1 * lambda_1 * 0.5).exp();
        assert_relative_eq!(result.center_theta, one_term, epsilon = 1e-3);

        assert_relative_eq!(result.center_theta, 0.772_526_383_423_810_2, epsilon = 1e-9);
        assert_relative_eq!(
            result.heat_ratio.into_inner(),
            0.318_895_434_553_278_96,
            epsilon = 1e-9
        );
        assert!(result.advisories.is_empty());
    }

    #[test]
    fn curved_reference_coefficients() {
        let cylinder = solve(&dimensionless_request(Geometry::Cylinder, 1.0, 0.3, 0.0));
        assert_relative_eq!(cylinder.eigenvalues[0].value, 1.2558, epsilon = 1e-4);
        assert_relative_eq!(cylinder.dominant_coefficient, 1.2071, epsilon = 1e-4);
        assert_relative_eq!(cylinder.theta, 0.750_132_363_677_227, epsilon = 1e-9);

        let sphere = solve(&dimensionless_request(Geometry::Sphere, 1.0, 0.3, 0.0));
        assert_relative_eq!(sphere.eigenvalues[0].value, 1.5708, epsilon = 1e-4);
        assert_relative_eq!(sphere.dominant_coefficient, 1.2732, epsilon = 1e-4);
    }

    #[test]
    fn quenched_steel_plate() {
        let result = solve(&steel_request(Geometry::Plate));

        assert_relative_eq!(result.groups.fourier.value(), 1.538_461_538_461_538_3, epsilon = 1e-12);
        assert_relative_eq!(result.theta, 0.555_003_726_803_683_5, epsilon = 1e-9);
        assert_relative_eq!(
            result.temperature.get::<degree_celsius>(),
            177.626_024_871_012_96,
            epsilon = 1e-6
        );
        assert_relative_eq!(result.heat_ratio.into_inner(), 0.483_638_299_574_184_8, epsilon = 1e-9);

        // ρc·ΔT·thickness = 3.9e6 · 275 · 0.1 J/m²
        assert!(matches!(result.max_heat, HeatAmount::PerUnitArea(_)));
        assert_relative_eq!(result.max_heat.si_value(), 1.0725e8, max_relative = 1e-9);
        assert_relative_eq!(
            result.heat.si_value(),
            1.0725e8 * result.heat_ratio.into_inner(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn heating_releases_negative_heat() {
        let mut request = steel_request(Geometry::Sphere);
        request.initial_temperature = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        request.ambient_temperature = ThermodynamicTemperature::new::<degree_celsius>(80.0);

        let result = solve(&request);
        assert!(result.heat_ratio.into_inner() > 0.0);
        assert!(result.heat.si_value() < 0.0);
        let t = result.temperature.get::<degree_celsius>();
        assert!(t > 20.0 && t < 80.0);
    }

    #[test]
    fn insulated_bodies_keep_their_temperature() {
        for geometry in GEOMETRIES {
            for (fourier, position) in [(0.0, 0.0), (0.3, 0.5), (5.0, 1.0)] {
                let mut request = dimensionless_request(geometry, 0.0, fourier, position);
                request.terms = 5;

                let result = solve(&request);
                assert_eq!(result.eigenvalues[0].value, 0.0);
                assert_eq!(result.theta, 1.0);
                assert_eq!(result.center_theta, 1.0);
                assert_eq!(result.heat_ratio.into_inner(), 0.0);
                assert_relative_eq!(
                    result.temperature.get::<degree_celsius>(),
                    100.0,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn center_starts_at_initial_temperature() {
        for geometry in GEOMETRIES {
            for biot in [0.1, 1.0, 50.0] {
                let result = solve(&dimensionless_request(geometry, biot, 0.0, 0.0));
                assert_eq!(result.center_theta, 1.0);
                assert_eq!(result.theta, 1.0);
                assert_eq!(result.heat_ratio.into_inner(), 0.0);
            }
        }
    }

    #[test]
    fn cooling_is_monotonic_in_time() {
        for geometry in GEOMETRIES {
            for biot in [0.5, 2.0, 10.0] {
                for position in [0.0, 0.5, 1.0] {
                    let mut previous: Option<CalculationResult> = None;
                    for step in 0..=40 {
                        let fourier = 0.2 + 0.07 * f64::from(step);
                        let result = solve(&dimensionless_request(geometry, biot, fourier, position));
                        let ratio = result.heat_ratio.into_inner();
                        assert!((0.0..=1.0).contains(&ratio));

                        if let Some(previous) = previous {
                            assert!(
                                result.theta <= previous.theta + 1e-15,
                                "{geometry} Bi={biot} x*={position} Fo={fourier}"
                            );
                            assert!(ratio >= previous.heat_ratio.into_inner() - 1e-15);
                        }
                        previous = Some(result);
                    }
                }
            }
        }
    }

    #[test]
    fn more_terms_never_hurt_accuracy() {
        for geometry in GEOMETRIES {
            for (biot, fourier, position) in [(1.0, 0.3, 0.5), (5.0, 0.2, 1.0), (0.2, 0.25, 0.0)] {
                let reference = theta(geometry, biot, fourier, position, 60);
                let errors: Vec<f64> = (1..=10)
                    .map(|n| (theta(geometry, biot, fourier, position, n) - reference).abs())
                    .collect();
                for pair in errors.windows(2) {
                    assert!(
                        pair[1] <= pair[0] + 1e-12,
                        "{geometry} Bi={biot}: {errors:?}"
                    );
                }
                assert!(errors[9] < 1e-12);
            }
        }
    }

    #[test]
    fn huge_biot_matches_the_fixed_surface_limit() {
        for geometry in GEOMETRIES {
            let results: Vec<CalculationResult> = [1e14, 1.585e14, 1e16]
                .into_iter()
                .map(|biot| solve(&dimensionless_request(geometry, biot, 0.5, 0.0)))
                .collect();
            for result in &results {
                assert!(
                    result.eigenvalues.windows(2).all(|pair| pair[0].value < pair[1].value),
                    "{geometry}: {:?}",
                    result.eigenvalues
                );
                assert_relative_eq!(result.theta, results[0].theta, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn tiny_biot_barely_cools() {
        for geometry in [Geometry::Plate, Geometry::Sphere] {
            let mut request = dimensionless_request(geometry, 1e-17, 0.5, 0.0);
            request.terms = 20;
            let result = solve(&request);
            assert_eq!(result.eigenvalues.len(), 20);
            assert_relative_eq!(result.theta, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn early_times_carry_an_advisory() {
        let result = solve(&dimensionless_request(Geometry::Cylinder, 1.0, 0.05, 0.0));
        assert!(result.theta < 1.0);
        assert_eq!(result.advisories.len(), 1);
        assert_eq!(result.advisories[0].code(), "fourier_below_threshold");
    }

    #[test]
    fn term_count_is_checked_first() {
        let mut request = steel_request(Geometry::Plate);
        request.thickness = Length::new::<meter>(-1.0);

        request.terms = 0;
        assert!(matches!(
            calculate(&request, &SolverConfig::default(), None),
            Err(CalculationError::InvalidTermCount { requested: 0, max: 100 })
        ));

        request.terms = 101;
        assert!(matches!(
            calculate(&request, &SolverConfig::default(), None),
            Err(CalculationError::InvalidTermCount { requested: 101, .. })
        ));
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let mut request = steel_request(Geometry::Sphere);
        request.convection_coefficient = HeatTransfer::new::<watt_per_square_meter_kelvin>(-5.0);
        let err = calculate(&request, &SolverConfig::default(), None).unwrap_err();
        assert_eq!(err.code(), "negative_quantity");
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn cached_and_uncached_results_match() {
        let cache = EigenvalueCache::default();
        let config = SolverConfig::default();
        for geometry in GEOMETRIES {
            let request = steel_request(geometry);
            let fresh = calculate(&request, &config, None).unwrap();
            let first = calculate(&request, &config, Some(&cache)).unwrap();
            let second = calculate(&request, &config, Some(&cache)).unwrap();
            assert_eq!(fresh, first);
            assert_eq!(first, second);
        }
        assert_eq!(cache.len(), 3);
    }
}
