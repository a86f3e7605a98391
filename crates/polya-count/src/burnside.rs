//! Burnside aggregation over pairs of row and column cycle types.
//!
//! A column permutation of cycle type `pw` and a row permutation of cycle
//! type `ph` together split the grid into blocks, one per pair of cycles. A
//! block of `l_w x l_h` cells falls into `gcd(l_w, l_h)` orbits, and a
//! coloring is fixed exactly when it is constant on every orbit. Summing
//! `size^orbits` over the whole group (class by class, weighted by class
//! sizes) and dividing by the group order counts the distinct colorings.

use std::sync::Arc;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::{debug, debug_span, warn};

use polya_core::{ErrorInfo, PolyaError};

use crate::factorial::FactorialTable;
use crate::gcd::GcdTable;
use crate::partition::{Partition, PartitionWeights};
use crate::query::GridQuery;

/// Tables required to evaluate a single query.
#[derive(Debug, Clone)]
pub struct CountTables {
    /// Factorials up to the larger grid dimension.
    pub factorials: Arc<FactorialTable>,
    /// Gcd lookup up to the larger grid dimension.
    pub gcd: Arc<GcdTable>,
    /// Cycle types of column permutations (partitions of the width).
    pub width_classes: Arc<PartitionWeights>,
    /// Cycle types of row permutations (partitions of the height).
    pub height_classes: Arc<PartitionWeights>,
}

impl CountTables {
    /// Builds fresh, unshared tables for the query.
    pub fn build(query: &GridQuery) -> Result<Self, PolyaError> {
        let max = query.max_dimension();
        let factorials = FactorialTable::new(max)?;
        let gcd = GcdTable::new(max)?;
        let width_classes = PartitionWeights::enumerate(query.width(), &factorials)?;
        let height_classes = if query.height() == query.width() {
            width_classes.clone()
        } else {
            PartitionWeights::enumerate(query.height(), &factorials)?
        };
        Ok(Self {
            factorials: Arc::new(factorials),
            gcd: Arc::new(gcd),
            width_classes: Arc::new(width_classes),
            height_classes: Arc::new(height_classes),
        })
    }

    fn check_covers(&self, query: &GridQuery) -> Result<(), PolyaError> {
        let max = query.max_dimension();
        if self.factorials.max() < max
            || self.gcd.max() < max
            || self.width_classes.n() != query.width()
            || self.height_classes.n() != query.height()
        {
            let info = ErrorInfo::new("polya.invalid_table_size", "tables do not match the query")
                .with_context("width", query.width().to_string())
                .with_context("height", query.height().to_string())
                .with_context("factorial_max", self.factorials.max().to_string())
                .with_context("gcd_max", self.gcd.max().to_string());
            return Err(PolyaError::InvalidArgument(info));
        }
        Ok(())
    }
}

/// Exact outcome of one orbit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitCount {
    /// The evaluated query.
    pub query: GridQuery,
    /// Burnside numerator: fixed colorings summed over the whole group.
    pub fixed_sum: BigUint,
    /// Group order, `width! * height!`.
    pub group_order: BigUint,
    /// Number of distinct colorings.
    pub orbits: BigUint,
    /// Number of column cycle types visited.
    pub width_classes: usize,
    /// Number of row cycle types visited.
    pub height_classes: usize,
}

impl OrbitCount {
    /// The orbit count rendered in base 10.
    pub fn value(&self) -> String {
        self.orbits.to_str_radix(10)
    }
}

/// Number of cell orbits under a column permutation of type `width_type`
/// combined with a row permutation of type `height_type`.
pub fn cell_orbits(
    width_type: &Partition,
    height_type: &Partition,
    gcd: &GcdTable,
) -> Result<usize, PolyaError> {
    let mut orbits = 0;
    for &lw in width_type.parts() {
        for &lh in height_type.parts() {
            orbits += gcd.get(lw, lh)?;
        }
    }
    Ok(orbits)
}

/// `size^k` for every `k` in `[0, cells]`.
fn power_table(size: u32, cells: usize) -> Vec<BigUint> {
    let base = BigUint::from(size);
    let mut powers = Vec::with_capacity(cells + 1);
    powers.push(BigUint::one());
    for k in 1..=cells {
        let next = &powers[k - 1] * &base;
        powers.push(next);
    }
    powers
}

/// Evaluates Burnside's lemma for the query using the supplied tables.
pub fn count_orbits(query: &GridQuery, tables: &CountTables) -> Result<OrbitCount, PolyaError> {
    let span = debug_span!(
        "count_orbits",
        width = query.width(),
        height = query.height(),
        size = query.size()
    );
    let _guard = span.enter();
    tables.check_covers(query)?;
    debug!(
        width_classes = tables.width_classes.len(),
        height_classes = tables.height_classes.len(),
        "aggregating cycle type pairs"
    );

    let powers = power_table(query.size(), query.cells());
    let mut fixed_sum = BigUint::zero();
    for (width_type, width_weight) in tables.width_classes.iter() {
        for (height_type, height_weight) in tables.height_classes.iter() {
            let orbits = cell_orbits(width_type, height_type, &tables.gcd)?;
            let fixed = powers.get(orbits).ok_or_else(|| {
                PolyaError::ArithmeticInconsistency(
                    ErrorInfo::new("polya.orbit_overflow", "cell orbits exceed the cell count")
                        .with_context("orbits", orbits.to_string())
                        .with_context("cells", query.cells().to_string()),
                )
            })?;
            fixed_sum += width_weight * height_weight * fixed;
        }
    }

    let group_order =
        tables.factorials.get(query.width())? * tables.factorials.get(query.height())?;
    let (orbits, remainder) = fixed_sum.div_rem(&group_order);
    if !remainder.is_zero() {
        warn!(%fixed_sum, %group_order, %remainder, "burnside sum not divisible by group order");
    }
    debug_assert_eq!(remainder, BigUint::zero(), "burnside sum must divide evenly");
    debug!(%orbits, "orbit count");

    Ok(OrbitCount {
        query: *query,
        fixed_sum,
        group_order,
        orbits,
        width_classes: tables.width_classes.len(),
        height_classes: tables.height_classes.len(),
    })
}
