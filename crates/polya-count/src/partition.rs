//! Integer partitions of `n` and their conjugacy class sizes in `S_n`.
//!
//! A permutation of `n` labelled elements decomposes into disjoint cycles
//! whose lengths form a partition of `n` (its cycle type). Two permutations
//! are conjugate exactly when they share a cycle type, and the class of a
//! cycle type with `m_l` cycles of length `l` holds
//! `n! / prod_l (l^{m_l} * m_l!)` permutations.

use std::collections::BTreeMap;
use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

use polya_core::{ErrorInfo, PolyaError};

use crate::factorial::FactorialTable;

/// A cycle type: positive parts kept in non-increasing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Partition(Vec<usize>);

impl Partition {
    /// Builds a partition from parts in any order.
    pub fn new(mut parts: Vec<usize>) -> Result<Self, PolyaError> {
        if parts.is_empty() || parts.contains(&0) {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.invalid_partition", "parts must be non-empty and positive")
                    .with_context("parts", format!("{parts:?}")),
            ));
        }
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self(parts))
    }

    /// The integer being partitioned.
    pub fn n(&self) -> usize {
        self.0.iter().sum()
    }

    /// Parts in non-increasing order.
    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Number of parts (cycles).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; partitions of a positive integer have at least one part.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiplicity `m_l` of every distinct part `l`.
    pub fn multiplicities(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for &part in &self.0 {
            *counts.entry(part).or_insert(0) += 1;
        }
        counts
    }

    /// Size of the conjugacy class of this cycle type in `S_n`.
    pub fn class_size(&self, factorials: &FactorialTable) -> Result<BigUint, PolyaError> {
        let n = self.n();
        let mut denominator = BigUint::one();
        for (part, multiplicity) in self.multiplicities() {
            denominator *= BigUint::from(part).pow(multiplicity as u32);
            denominator *= factorials.get(multiplicity)?;
        }
        let (weight, remainder) = factorials.get(n)?.div_rem(&denominator);
        if !remainder.is_zero() {
            let info = ErrorInfo::new(
                "polya.inexact_weight",
                "class size division left a remainder",
            )
            .with_context("partition", self.to_string())
            .with_context("remainder", remainder.to_string());
            return Err(PolyaError::ArithmeticInconsistency(info));
        }
        Ok(weight)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, part) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, "+")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// Every partition of `n`, each exactly once, in reverse lexicographic order.
///
/// Returns an empty list for `n == 0`.
pub fn partitions(n: usize) -> Vec<Partition> {
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let mut prefix = Vec::with_capacity(n);
    collect(n, n, &mut prefix, &mut out);
    out
}

// Appends every partition of `remaining` with parts <= `bound` to `prefix`.
fn collect(remaining: usize, bound: usize, prefix: &mut Vec<usize>, out: &mut Vec<Partition>) {
    if remaining == 0 {
        out.push(Partition(prefix.clone()));
        return;
    }
    for part in (1..=bound.min(remaining)).rev() {
        prefix.push(part);
        collect(remaining - part, part, prefix, out);
        prefix.pop();
    }
}

/// The partition number `p(n)` via Euler's pentagonal number recurrence.
///
/// Exact for every `n`; `p(n)` leaves `u64` range at `n = 417`.
pub fn partition_count(n: usize) -> BigUint {
    let mut p: Vec<BigUint> = Vec::with_capacity(n + 1);
    p.push(BigUint::one());
    for m in 1..=n {
        // terms alternate in sign in pairs; the positive sum always dominates
        let mut plus = BigUint::zero();
        let mut minus = BigUint::zero();
        let mut k: usize = 1;
        loop {
            let first = k * (3 * k - 1) / 2;
            if first > m {
                break;
            }
            let acc = if k % 2 == 1 { &mut plus } else { &mut minus };
            *acc += &p[m - first];
            let second = k * (3 * k + 1) / 2;
            if second <= m {
                *acc += &p[m - second];
            }
            k += 1;
        }
        p.push(plus - minus);
    }
    p.swap_remove(n)
}

/// Every cycle type of `S_n` mapped to its conjugacy class size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionWeights {
    n: usize,
    weights: BTreeMap<Partition, BigUint>,
}

impl PartitionWeights {
    /// Enumerates all partitions of `n` and weighs each by its class size.
    pub fn enumerate(n: usize, factorials: &FactorialTable) -> Result<Self, PolyaError> {
        if n == 0 {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.invalid_partition", "cannot partition n < 1")
                    .with_context("n", "0"),
            ));
        }
        if n > factorials.max() {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.invalid_table_size", "factorial table too small for n")
                    .with_context("n", n.to_string())
                    .with_context("max", factorials.max().to_string()),
            ));
        }
        let mut weights = BTreeMap::new();
        for partition in partitions(n) {
            let weight = partition.class_size(factorials)?;
            trace!(n, %partition, %weight, "cycle type");
            weights.insert(partition, weight);
        }
        Ok(Self { n, weights })
    }

    /// The integer whose partitions are stored.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct cycle types, `p(n)`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false` for a successfully enumerated `n >= 1`.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over cycle types and class sizes, ascending by parts.
    pub fn iter(&self) -> impl Iterator<Item = (&Partition, &BigUint)> + '_ {
        self.weights.iter()
    }

    /// Class size of a specific cycle type, if it partitions `n`.
    pub fn weight(&self, partition: &Partition) -> Option<&BigUint> {
        self.weights.get(partition)
    }

    /// Sum of all class sizes; equals `n!`.
    pub fn total_weight(&self) -> BigUint {
        self.weights.values().sum()
    }
}
