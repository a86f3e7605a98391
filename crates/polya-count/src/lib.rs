#![deny(missing_docs)]
#![doc = "Counts colorings of a rectangular grid that are distinct up to independent \
permutation of its rows and columns, using Burnside's lemma in cycle-index form."]

/// Burnside aggregation over pairs of cycle types.
pub mod burnside;
/// Cross-query memoisation of the lookup tables.
pub mod cache;
/// Factorial lookup table.
pub mod factorial;
/// Gcd lookup table and Euclid's algorithm.
pub mod gcd;
/// Partition enumeration and conjugacy class weights.
pub mod partition;
/// Validated query parameters.
pub mod query;
/// Serialisable orbit reports.
pub mod report;
/// JSON helpers for orbit reports.
#[path = "serde.rs"]
pub mod serde_io;

use polya_core::{CountConfig, PolyaError};

pub use burnside::{cell_orbits, count_orbits, CountTables, OrbitCount};
pub use cache::TableCache;
pub use factorial::FactorialTable;
pub use gcd::{gcd, GcdTable};
pub use partition::{partition_count, partitions, Partition, PartitionWeights};
pub use query::{check_group_order, GridQuery};
pub use report::{report_hash, OrbitReport};
pub use serde_io::{report_from_json, report_to_json};

/// Evaluates orbit counts under a fixed configuration.
#[derive(Debug, Default)]
pub struct OrbitCounter {
    config: CountConfig,
    cache: Option<TableCache>,
}

impl OrbitCounter {
    /// Creates a counter; tables are cached when the configuration asks for it.
    pub fn new(config: CountConfig) -> Result<Self, PolyaError> {
        config.validate()?;
        let cache = config.cache_tables.then(TableCache::new);
        Ok(Self { config, cache })
    }

    /// The configuration this counter validates against.
    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// The table cache, when enabled.
    pub fn cache(&self) -> Option<&TableCache> {
        self.cache.as_ref()
    }

    /// Validates raw input against the configured limits.
    pub fn query(&self, width: i64, height: i64, size: i64) -> Result<GridQuery, PolyaError> {
        GridQuery::new(width, height, size, &self.config.limits)
    }

    /// Validates `n` against the configured limits, then enumerates the cycle
    /// types of `S_n` with their class sizes.
    pub fn classes(&self, n: i64) -> Result<PartitionWeights, PolyaError> {
        let n = check_group_order(n, &self.config.limits)?;
        let factorials = FactorialTable::new(n)?;
        PartitionWeights::enumerate(n, &factorials)
    }

    /// Counts the distinct colorings for a validated query.
    pub fn count(&self, query: &GridQuery) -> Result<OrbitCount, PolyaError> {
        let tables = match &self.cache {
            Some(cache) => cache.tables_for(query)?,
            None => CountTables::build(query)?,
        };
        count_orbits(query, &tables)
    }

    /// Validates, counts and renders the result in base 10.
    pub fn solve(&self, width: i64, height: i64, size: i64) -> Result<String, PolyaError> {
        let query = self.query(width, height, size)?;
        Ok(self.count(&query)?.value())
    }
}

/// Number of `size`-colorings of a `width x height` grid distinct up to
/// permuting rows and permuting columns, as a base-10 string.
///
/// Inputs are checked against the default [`polya_core::CountLimits`];
/// non-positive or oversized values yield [`PolyaError::InvalidArgument`].
///
/// ```
/// assert_eq!(polya_count::solution(2, 2, 2).unwrap(), "7");
/// assert_eq!(polya_count::solution(2, 3, 4).unwrap(), "430");
/// ```
pub fn solution(width: i64, height: i64, size: i64) -> Result<String, PolyaError> {
    OrbitCounter::default().solve(width, height, size)
}
