use polya_core::{ErrorInfo, PolyaError};

/// Symmetric table of `gcd(i, j)` for `i, j` in `[1, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcdTable {
    max: usize,
    // row-major, cell (i, j) at (i - 1) * max + (j - 1)
    cells: Vec<usize>,
}

impl GcdTable {
    /// Builds the table using `gcd(i, j) = gcd(i, j - i)` for `i < j`.
    ///
    /// Rows are filled in increasing `i` and, within a row, in increasing
    /// `j`, so the cell `(i, j - i)` is always populated before `(i, j)`
    /// needs it: either it lies earlier in the same row, or `j - i < i` and it
    /// was mirrored in while row `j - i` was filled.
    pub fn new(max: usize) -> Result<Self, PolyaError> {
        if max == 0 {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.invalid_table_size", "gcd table needs max >= 1")
                    .with_context("max", "0"),
            ));
        }
        let mut cells = vec![0usize; max * max];
        let idx = |i: usize, j: usize| (i - 1) * max + (j - 1);
        for i in 1..=max {
            for j in i..=max {
                let value = if i == 1 {
                    1
                } else if i == j {
                    i
                } else {
                    cells[idx(i, j - i)]
                };
                cells[idx(i, j)] = value;
                cells[idx(j, i)] = value;
            }
        }
        Ok(Self { max, cells })
    }

    /// Largest index covered by the table.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns `gcd(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<usize, PolyaError> {
        if i == 0 || j == 0 || i > self.max || j > self.max {
            return Err(PolyaError::InvalidArgument(
                ErrorInfo::new("polya.index_out_of_range", "gcd lookup outside table")
                    .with_context("i", i.to_string())
                    .with_context("j", j.to_string())
                    .with_context("max", self.max.to_string()),
            ));
        }
        Ok(self.cells[(i - 1) * self.max + (j - 1)])
    }
}

/// Euclid's algorithm, independent of any table.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
