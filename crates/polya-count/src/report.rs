use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use polya_core::{ErrorInfo, PolyaError, SchemaVersion};

use crate::burnside::OrbitCount;

/// Serialisable record of a single orbit count.
///
/// Big integers are carried as base-10 strings so the payload survives JSON
/// consumers without arbitrary-precision number support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Palette size.
    pub size: u32,
    /// Number of column cycle types, `p(width)`.
    pub width_classes: usize,
    /// Number of row cycle types, `p(height)`.
    pub height_classes: usize,
    /// Order of the symmetry group, `width! * height!`.
    pub group_order: String,
    /// Fixed colorings summed over the group.
    pub fixed_sum: String,
    /// Number of distinct colorings.
    pub orbits: String,
    /// SHA-256 over the canonical JSON of every other field.
    #[serde(default)]
    pub report_hash: String,
}

#[derive(Serialize)]
struct HashPayload<'a> {
    schema_version: SchemaVersion,
    width: usize,
    height: usize,
    size: u32,
    width_classes: usize,
    height_classes: usize,
    group_order: &'a str,
    fixed_sum: &'a str,
    orbits: &'a str,
}

impl OrbitReport {
    /// Builds a hashed report from a completed count.
    pub fn from_count(count: &OrbitCount) -> Result<Self, PolyaError> {
        let mut report = Self {
            schema_version: SchemaVersion::current(),
            width: count.query.width(),
            height: count.query.height(),
            size: count.query.size(),
            width_classes: count.width_classes,
            height_classes: count.height_classes,
            group_order: count.group_order.to_string(),
            fixed_sum: count.fixed_sum.to_string(),
            orbits: count.value(),
            report_hash: String::new(),
        };
        report.report_hash = report_hash(&report)?;
        Ok(report)
    }

    /// Returns `true` when the stored hash matches the report contents.
    pub fn verify_hash(&self) -> Result<bool, PolyaError> {
        Ok(report_hash(self)? == self.report_hash)
    }
}

/// Computes the content hash of a report, ignoring its `report_hash` field.
pub fn report_hash(report: &OrbitReport) -> Result<String, PolyaError> {
    let payload = HashPayload {
        schema_version: report.schema_version,
        width: report.width,
        height: report.height,
        size: report.size,
        width_classes: report.width_classes,
        height_classes: report.height_classes,
        group_order: &report.group_order,
        fixed_sum: &report.fixed_sum,
        orbits: &report.orbits,
    };
    let bytes = serde_json::to_vec(&payload)
        .map_err(|err| PolyaError::Serde(ErrorInfo::new("polya.report_hash", err.to_string())))?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}
