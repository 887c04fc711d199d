#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized config JSON parsing tests
// ============================================================================

#[test_case(r#"{"log_level": "info"}"#, "info")]
#[test_case(r#"{"log_level": "debug"}"#, "debug")]
#[test_case(r#"{"log_level": "trace"}"#, "trace")]
#[test_case(r#"{}"#, "info")]
fn PatcherConfig___log_level_json___parses_correctly(json: &str, expected_level: &str) {
    let config = PatcherConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.log_level, expected_level);
}

#[test_case(r#"{"data_directory": "/opt/dbp/data"}"#, "/opt/dbp/data")]
#[test_case(r#"{"data_directory": "share"}"#, "share")]
#[test_case(r#"{}"#, "data")]
fn PatcherConfig___data_directory_json___parses_correctly(json: &str, expected: &str) {
    let config = PatcherConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.data_directory, PathBuf::from(expected));
}

// ============================================================================
// Parameterized partition lookup tests
// ============================================================================

#[test_case("dual", true)]
#[test_case("multi-slot-1", true)]
#[test_case("multi-slot-3", true)]
#[test_case("multi-slot-4", false)]
#[test_case("", false)]
fn PatcherConfig___part_config___default_lookup(id: &str, found: bool) {
    let config = PatcherConfig::default();
    assert_eq!(config.part_config(id).is_some(), found);
}

#[test_case(r#"{"part_configs": [{"id": "a", "name": "A"}]}"#, 1)]
#[test_case(r#"{"part_configs": []}"#, 0)]
#[test_case(r#"{"part_configs": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}]}"#, 2)]
fn PatcherConfig___part_configs_json___parses_count(json: &str, expected: usize) {
    let config = PatcherConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.part_configs.len(), expected);
}
