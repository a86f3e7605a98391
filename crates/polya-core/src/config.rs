//! YAML-configurable settings for orbit counting runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, PolyaError};

/// Settings governing how queries are validated and evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    /// Sanity bounds applied to every query before any table is built.
    #[serde(default)]
    pub limits: CountLimits,
    /// Reuse factorial, gcd and partition tables across queries.
    #[serde(default)]
    pub cache_tables: bool,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            limits: CountLimits::default(),
            cache_tables: false,
        }
    }
}

impl CountConfig {
    /// Parses a configuration from YAML text and validates it.
    pub fn from_yaml_str(text: &str) -> Result<Self, PolyaError> {
        let config: CountConfig = serde_yaml::from_str(text).map_err(|err| {
            PolyaError::Config(ErrorInfo::new("polya.config_parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, PolyaError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            PolyaError::Config(
                ErrorInfo::new("polya.config_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            PolyaError::Config(info) => {
                PolyaError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks that the configured limits describe a usable domain.
    pub fn validate(&self) -> Result<(), PolyaError> {
        self.limits.validate()
    }
}

/// Upper bounds on query parameters.
///
/// Partition counts grow quickly with the grid dimension and the pairwise
/// aggregation is quadratic in them, so the dimension bound is what keeps a
/// single query tractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountLimits {
    /// Largest accepted grid width or height.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Largest accepted palette size.
    #[serde(default = "default_max_palette")]
    pub max_palette: u32,
}

fn default_max_dimension() -> u32 {
    12
}

fn default_max_palette() -> u32 {
    20
}

impl Default for CountLimits {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            max_palette: default_max_palette(),
        }
    }
}

impl CountLimits {
    /// Rejects limits that would make every query invalid.
    pub fn validate(&self) -> Result<(), PolyaError> {
        if self.max_dimension == 0 || self.max_palette == 0 {
            let info = ErrorInfo::new("polya.config_limits", "limits must be at least 1")
                .with_context("max_dimension", self.max_dimension.to_string())
                .with_context("max_palette", self.max_palette.to_string());
            return Err(PolyaError::Config(info));
        }
        Ok(())
    }
}
