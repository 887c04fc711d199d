#![allow(non_snake_case)]

use super::*;

#[test]
fn FileInfo___new___exposes_part_config_id() {
    let info = FileInfo::new("rom.zip", PartConfig::new("secondary", "Secondary"));

    assert_eq!(info.part_config().id(), "secondary");
    assert_eq!(info.filename(), Path::new("rom.zip"));
    assert!(info.device.is_none());
}

#[test]
fn FileInfo___with_device___sets_codename() {
    let info = FileInfo::new("rom.zip", PartConfig::new("dual", "Dual Boot")).with_device("jflte");

    assert_eq!(info.device.as_deref(), Some("jflte"));
}

#[test]
fn FileInfo___json___roundtrips_without_device() {
    let json = r#"{"filename": "rom.zip", "part_config": {"id": "dual", "name": "Dual Boot"}}"#;

    let info: FileInfo = serde_json::from_str(json).unwrap();

    assert_eq!(info.part_config().id(), "dual");
    assert_eq!(info.device, None);
}
