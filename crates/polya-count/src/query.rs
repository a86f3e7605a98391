use polya_core::{CountLimits, ErrorInfo, PolyaError};

/// A validated `(width, height, size)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridQuery {
    width: usize,
    height: usize,
    size: u32,
}

impl GridQuery {
    /// Validates raw caller input against the given limits.
    ///
    /// Values below one or above the limits are rejected, never clamped.
    pub fn new(
        width: i64,
        height: i64,
        size: i64,
        limits: &CountLimits,
    ) -> Result<Self, PolyaError> {
        let width = check("polya.invalid_width", "width", width, limits.max_dimension)?;
        let height = check("polya.invalid_height", "height", height, limits.max_dimension)?;
        let size = check("polya.invalid_size", "size", size, limits.max_palette)?;
        Ok(Self {
            width: width as usize,
            height: height as usize,
            size,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette cardinality.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The larger grid dimension; every table is built up to this bound.
    pub fn max_dimension(&self) -> usize {
        self.width.max(self.height)
    }

    /// Number of grid cells, the largest possible orbit count.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// The same query with rows and columns exchanged.
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            size: self.size,
        }
    }
}

/// Validates the order `n` of a symmetric group against the dimension bound.
pub fn check_group_order(n: i64, limits: &CountLimits) -> Result<usize, PolyaError> {
    let n = check("polya.invalid_partition", "n", n, limits.max_dimension)?;
    Ok(n as usize)
}

fn check(code: &str, name: &str, value: i64, bound: u32) -> Result<u32, PolyaError> {
    if value < 1 {
        let info = ErrorInfo::new(code, format!("{name} must be >= 1"))
            .with_context(name, value.to_string());
        return Err(PolyaError::InvalidArgument(info));
    }
    if value > i64::from(bound) {
        let info = ErrorInfo::new(code, format!("{name} exceeds the configured limit"))
            .with_context(name, value.to_string())
            .with_context("limit", bound.to_string())
            .with_hint("raise the limit in the count configuration");
        return Err(PolyaError::InvalidArgument(info));
    }
    Ok(value as u32)
}
