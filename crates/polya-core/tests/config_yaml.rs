use std::io::Write;

use polya_core::{CountConfig, CountLimits, PolyaError};

#[test]
fn empty_document_uses_defaults() {
    let config = CountConfig::from_yaml_str("{}").expect("defaults");
    assert_eq!(config, CountConfig::default());
    assert_eq!(config.limits.max_dimension, 12);
    assert_eq!(config.limits.max_palette, 20);
    assert!(!config.cache_tables);
}

#[test]
fn partial_limits_keep_remaining_defaults() {
    let config = CountConfig::from_yaml_str("limits:\n  max_palette: 40\ncache_tables: true\n")
        .expect("parse");
    assert_eq!(
        config.limits,
        CountLimits {
            max_dimension: 12,
            max_palette: 40,
        }
    );
    assert!(config.cache_tables);
}

#[test]
fn zero_limits_are_rejected() {
    let err = CountConfig::from_yaml_str("limits:\n  max_dimension: 0\n").expect_err("zero");
    assert!(matches!(err, PolyaError::Config(_)));
    assert_eq!(err.info().code, "polya.config_limits");
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = CountConfig::from_yaml_str("limits: [1, 2").expect_err("malformed");
    assert_eq!(err.info().code, "polya.config_parse");
}

#[test]
fn load_reads_file_and_reports_path_on_failure() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "limits:\n  max_dimension: 8").expect("write");
    let config = CountConfig::load(file.path()).expect("load");
    assert_eq!(config.limits.max_dimension, 8);

    let missing = file.path().with_extension("missing");
    let err = CountConfig::load(&missing).expect_err("missing file");
    assert_eq!(err.info().code, "polya.config_read");
    assert!(err.info().context.contains_key("path"));
}
