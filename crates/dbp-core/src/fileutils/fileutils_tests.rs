#![allow(non_snake_case)]

use super::*;

#[test]
fn read_to_memory___existing_file___returns_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.bin");
    std::fs::write(&path, [0u8, 0xff, b'\n', 0x80]).unwrap();

    let contents = read_to_memory(&path).unwrap();

    assert_eq!(contents, vec![0u8, 0xff, b'\n', 0x80]);
}

#[test]
fn read_to_memory___missing_file___returns_open_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing");

    let err = read_to_memory(&path).unwrap_err();

    match err {
        PatcherError::FileOpenError { path: p, .. } => assert!(p.ends_with("missing")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn write_from_memory___overwrites_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.txt");
    std::fs::write(&path, "a much longer original body").unwrap();

    write_from_memory(&path, b"short").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"short");
}

#[test]
fn write_from_memory___missing_parent___returns_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/file.txt");

    let result = write_from_memory(&path, b"data");

    assert!(matches!(result, Err(PatcherError::FileOpenError { .. })));
}

#[test]
fn append_to_file___appends_after_existing_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.txt");
    std::fs::write(&path, "first\n").unwrap();

    append_to_file(&path, b"second\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn append_to_file___twice___duplicates_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.txt");
    std::fs::write(&path, "").unwrap();

    append_to_file(&path, b"x\n").unwrap();
    append_to_file(&path, b"x\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\nx\n");
}

#[test]
fn append_to_file___missing_file___fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let result = append_to_file(&path, b"x\n");

    assert!(result.is_err());
    assert!(!path.exists());
}
