use std::path::Path;

use polya_core::{ErrorInfo, PolyaError};

use crate::report::OrbitReport;

/// Serialises an orbit report into indented JSON.
pub fn report_to_json(report: &OrbitReport) -> Result<String, PolyaError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| PolyaError::Serde(ErrorInfo::new("polya.report_encode", err.to_string())))
}

/// Deserialises an orbit report from JSON text.
pub fn report_from_json(json: &str) -> Result<OrbitReport, PolyaError> {
    serde_json::from_str(json)
        .map_err(|err| PolyaError::Serde(ErrorInfo::new("polya.report_decode", err.to_string())))
}

/// Writes a JSON payload to disk.
pub fn write_json(path: &Path, json: &str) -> Result<(), PolyaError> {
    std::fs::write(path, json).map_err(|err| {
        PolyaError::Serde(
            ErrorInfo::new("polya.json_write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
