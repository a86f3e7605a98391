use polya_core::errors::{ErrorInfo, PolyaError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("width", "0")
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = PolyaError::InvalidArgument(sample_info("polya.invalid_width", "width must be >= 1"));
    assert_eq!(err.info().code, "polya.invalid_width");
    assert!(err.info().context.contains_key("width"));
    assert!(err.is_invalid_argument());
}

#[test]
fn arithmetic_surface() {
    let err = PolyaError::ArithmeticInconsistency(sample_info("polya.inexact_weight", "remainder"));
    assert_eq!(err.info().code, "polya.inexact_weight");
    assert!(!err.is_invalid_argument());
}

#[test]
fn config_surface() {
    let err = PolyaError::Config(sample_info("polya.config_parse", "bad yaml"));
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = PolyaError::InvalidArgument(
        ErrorInfo::new("polya.invalid_size", "size must be >= 1")
            .with_context("size", "-3")
            .with_hint("use a palette of at least one color"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "invalid argument: size must be >= 1 (code: polya.invalid_size) | context: [size=-3] | hint: use a palette of at least one color"
    );
}

#[test]
fn error_round_trips_json() {
    let err = PolyaError::Serde(sample_info("polya.report_decode", "truncated"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: PolyaError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
