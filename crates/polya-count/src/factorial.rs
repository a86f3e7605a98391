use num_bigint::BigUint;
use num_traits::One;

use polya_core::{ErrorInfo, PolyaError};

/// Precomputed factorials `0!..=max!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialTable {
    values: Vec<BigUint>,
}

impl FactorialTable {
    /// Builds the table for every `i` in `[0, max]`.
    pub fn new(max: usize) -> Result<Self, PolyaError> {
        if max == 0 {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.invalid_table_size", "factorial table needs max >= 1")
                    .with_context("max", "0"),
            ));
        }
        let mut values = Vec::with_capacity(max + 1);
        values.push(BigUint::one());
        for i in 1..=max {
            let next = &values[i - 1] * BigUint::from(i);
            values.push(next);
        }
        Ok(Self { values })
    }

    /// Largest `i` for which `i!` is stored.
    pub fn max(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns `i!`.
    pub fn get(&self, i: usize) -> Result<&BigUint, PolyaError> {
        self.values.get(i).ok_or_else(|| {
            PolyaError::InvalidArgument(
                ErrorInfo::new("polya.index_out_of_range", "factorial lookup beyond table")
                    .with_context("index", i.to_string())
                    .with_context("max", self.max().to_string()),
            )
        })
    }
}
