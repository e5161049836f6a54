//! Transient conduction in plates, cylinders and spheres.
//!
//! [`TransientConduction`] is a [`Model`] from a [`CalculationRequest`] to a
//! [`CalculationResult`], computed with the Heisler/Gröber eigenfunction
//! series. The computational core lives in the internal `core` module and
//! the JSON request and response shapes of the calculation endpoint in
//! [`wire`].

mod core;
pub mod wire;

pub use self::core::{
    Advisory, Biot, BiotSource, CalculationError, CalculationRequest, CalculationResult,
    DiffusivitySource, DimensionlessGroups, Eigenvalue, EigenvalueCache, ErrorKind, Fourier,
    Geometry, HeatAmount, SeriesTerm, SolverConfig, calculate,
};

use twine_core::Model;

/// Transient conduction model.
///
/// Holds a [`SolverConfig`] and, optionally, an [`EigenvalueCache`] shared by
/// every call. The model is `Send + Sync`, so one instance can serve
/// concurrent requests.
#[derive(Debug, Default)]
pub struct TransientConduction {
    config: SolverConfig,
    cache: Option<EigenvalueCache>,
}

impl TransientConduction {
    /// Creates a model with the given configuration and no cache.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Memoizes eigenvalue sets in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: EigenvalueCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The eigenvalue cache, if one is attached.
    #[must_use]
    pub fn cache(&self) -> Option<&EigenvalueCache> {
        self.cache.as_ref()
    }
}

impl Model for TransientConduction {
    type Input = CalculationRequest;
    type Output = CalculationResult;
    type Error = CalculationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        calculate(input, &self.config, self.cache.as_ref())
    }
}
