use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use polya_core::PolyaError;

use crate::burnside::CountTables;
use crate::factorial::FactorialTable;
use crate::gcd::GcdTable;
use crate::partition::PartitionWeights;
use crate::query::GridQuery;

/// Memoised tables shared across queries.
///
/// Factorial and gcd tables are keyed by the larger grid dimension, class
/// weights by the integer being partitioned. Entries are immutable once
/// inserted.
#[derive(Debug, Default)]
pub struct TableCache {
    factorials: Mutex<BTreeMap<usize, Arc<FactorialTable>>>,
    gcd: Mutex<BTreeMap<usize, Arc<GcdTable>>>,
    classes: Mutex<BTreeMap<usize, Arc<PartitionWeights>>>,
}

impl TableCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns tables for the query, building any that are missing.
    pub fn tables_for(&self, query: &GridQuery) -> Result<CountTables, PolyaError> {
        let max = query.max_dimension();
        let factorials = get_or_try_insert(&self.factorials, max, || FactorialTable::new(max))?;
        let gcd = get_or_try_insert(&self.gcd, max, || GcdTable::new(max))?;
        let width_classes = get_or_try_insert(&self.classes, query.width(), || {
            PartitionWeights::enumerate(query.width(), &factorials)
        })?;
        let height_classes = get_or_try_insert(&self.classes, query.height(), || {
            PartitionWeights::enumerate(query.height(), &factorials)
        })?;
        Ok(CountTables {
            factorials,
            gcd,
            width_classes,
            height_classes,
        })
    }

    /// Number of distinct partition sets currently held.
    pub fn cached_class_sets(&self) -> usize {
        lock(&self.classes).len()
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        lock(&self.factorials).clear();
        lock(&self.gcd).clear();
        lock(&self.classes).clear();
    }
}

// Entries are inserted whole, so a poisoned map is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn get_or_try_insert<T>(
    map: &Mutex<BTreeMap<usize, Arc<T>>>,
    key: usize,
    build: impl FnOnce() -> Result<T, PolyaError>,
) -> Result<Arc<T>, PolyaError> {
    if let Some(hit) = lock(map).get(&key) {
        return Ok(Arc::clone(hit));
    }
    debug!(key, table = std::any::type_name::<T>(), "building cached table");
    let built = Arc::new(build()?);
    let mut guard = lock(map);
    let entry = guard.entry(key).or_insert(built);
    Ok(Arc::clone(entry))
}
