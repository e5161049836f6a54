use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::models::thermal::transient::core::{CalculationError, Geometry};

use super::Eigenvalue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    geometry: Geometry,
    biot_bits: u64,
    count: usize,
}

impl CacheKey {
    fn new(geometry: Geometry, biot: f64, count: usize) -> Self {
        Self {
            geometry,
            // Folds −0.0 into 0.0.
            biot_bits: (biot + 0.0).to_bits(),
            count,
        }
    }
}

/// Memoized eigenvalue sets, shareable between threads.
///
/// Entries are keyed on the geometry, the exact bit pattern of the Biot
/// number and the term count. Published entries are never modified, so a
/// cached result is bit-identical to a fresh solve with the same
/// configuration. A cache must therefore only be used with one
/// [`SolverConfig`](super::super::SolverConfig).
///
/// Once `capacity` entries are stored, new sets are still computed and
/// returned but no longer retained.
#[derive(Debug)]
pub struct EigenvalueCache {
    entries: RwLock<HashMap<CacheKey, Arc<[Eigenvalue]>>>,
    capacity: usize,
}

impl EigenvalueCache {
    /// Default number of retained eigenvalue sets.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Creates an empty cache retaining at most `capacity` sets.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Number of retained sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been retained yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached set for the key, or computes and publishes it.
    ///
    /// `solve` runs without the lock held. Two threads missing on the same
    /// key may both compute it; the first to publish wins and both return
    /// identical values.
    pub(crate) fn get_or_try_insert_with<F>(
        &self,
        geometry: Geometry,
        biot: f64,
        count: usize,
        solve: F,
    ) -> Result<Arc<[Eigenvalue]>, CalculationError>
    where
        F: FnOnce() -> Result<Vec<Eigenvalue>, CalculationError>,
    {
        let key = CacheKey::new(geometry, biot, count);

        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(hit));
        }

        let solved: Arc<[Eigenvalue]> = solve()?.into();

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(&key) {
            return Ok(Arc::clone(existing));
        }
        if entries.len() < self.capacity {
            entries.insert(key, Arc::clone(&solved));
        }
        Ok(solved)
    }
}

impl Default for EigenvalueCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    fn fake(value: f64) -> Vec<Eigenvalue> {
        vec![Eigenvalue {
            index: 1,
            value,
            residual: 0.0,
            iters: 1,
        }]
    }

    #[test]
    fn second_lookup_is_a_hit() {
        let cache = EigenvalueCache::default();
        let calls = Cell::new(0);
        let solve = || {
            calls.set(calls.get() + 1);
            Ok(fake(1.0))
        };

        let first = cache.get_or_try_insert_with(Geometry::Plate, 1.0, 1, solve).unwrap();
        let second = cache
            .get_or_try_insert_with(Geometry::Plate, 1.0, 1, || Ok(fake(99.0)))
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_distinguish_all_parts() {
        let cache = EigenvalueCache::default();
        for (geometry, biot, count) in [
            (Geometry::Plate, 1.0, 1),
            (Geometry::Sphere, 1.0, 1),
            (Geometry::Plate, 1.0 + f64::EPSILON, 1),
            (Geometry::Plate, 1.0, 2),
        ] {
            cache
                .get_or_try_insert_with(geometry, biot, count, || Ok(fake(biot)))
                .unwrap();
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn negative_zero_shares_the_zero_entry() {
        let cache = EigenvalueCache::default();
        cache
            .get_or_try_insert_with(Geometry::Cylinder, 0.0, 1, || Ok(fake(0.0)))
            .unwrap();
        cache
            .get_or_try_insert_with(Geometry::Cylinder, -0.0, 1, || Ok(fake(5.0)))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = EigenvalueCache::default();
        let err = cache.get_or_try_insert_with(Geometry::Plate, 1.0, 1, || {
            Err(CalculationError::UnphysicalResult { ratio: 2.0 })
        });
        assert!(err.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn full_cache_still_answers() {
        let cache = EigenvalueCache::new(1);
        cache
            .get_or_try_insert_with(Geometry::Plate, 1.0, 1, || Ok(fake(1.0)))
            .unwrap();
        let value = cache
            .get_or_try_insert_with(Geometry::Plate, 2.0, 1, || Ok(fake(2.0)))
            .unwrap();
        assert_eq!(value[0].value, 2.0);
        assert_eq!(cache.len(), 1);
    }
}
