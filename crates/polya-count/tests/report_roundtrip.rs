use polya_core::SchemaVersion;
use polya_count::serde_io::write_json;
use polya_count::{report_from_json, report_hash, report_to_json, OrbitCounter, OrbitReport};

fn sample_report() -> OrbitReport {
    let counter = OrbitCounter::default();
    let query = counter.query(2, 3, 4).unwrap();
    let count = counter.count(&query).unwrap();
    OrbitReport::from_count(&count).unwrap()
}

#[test]
fn report_carries_exact_values() {
    let report = sample_report();
    assert_eq!(report.schema_version, SchemaVersion::new(1, 0, 0));
    assert_eq!((report.width, report.height, report.size), (2, 3, 4));
    assert_eq!(report.width_classes, 2);
    assert_eq!(report.height_classes, 3);
    assert_eq!(report.group_order, "12");
    assert_eq!(report.fixed_sum, "5160");
    assert_eq!(report.orbits, "430");
    assert_eq!(report.report_hash.len(), 64);
    assert!(report.verify_hash().unwrap());
}

#[test]
fn report_round_trips_json() {
    let report = sample_report();
    let json = report_to_json(&report).unwrap();
    let decoded = report_from_json(&json).unwrap();
    assert_eq!(decoded, report);
    assert!(decoded.verify_hash().unwrap());
}

#[test]
fn hash_detects_tampering() {
    let mut report = sample_report();
    let original = report.report_hash.clone();
    report.orbits = "431".into();
    assert!(!report.verify_hash().unwrap());
    assert_ne!(report_hash(&report).unwrap(), original);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = report_from_json("{\"width\": 2").expect_err("truncated");
    assert_eq!(err.info().code, "polya.report_decode");
}

#[test]
fn report_written_to_disk_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = sample_report();
    write_json(&path, &report_to_json(&report).unwrap()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(report_from_json(&text).unwrap(), report);
}
