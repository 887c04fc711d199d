#![allow(non_snake_case)]

use super::*;
use crate::PartConfig;

// Test helper patcher
struct StampPatcher;

impl AutoPatcher for StampPatcher {
    fn id(&self) -> &str {
        "StampPatcher"
    }

    fn existing_files(&self) -> Vec<String> {
        vec!["system/build.prop".to_string()]
    }

    fn patch_files(
        &self,
        ctx: &PatcherContext<'_>,
        directory: &Path,
        _boot_images: &[PathBuf],
    ) -> PatcherResult<()> {
        let line = format!("ro.stamp={}\n", ctx.info().part_config().id());
        crate::fileutils::append_to_file(&directory.join("system/build.prop"), line.as_bytes())
    }
}

fn write_build_prop(dir: &Path, contents: &str) {
    std::fs::create_dir_all(dir.join("system")).unwrap();
    std::fs::write(dir.join("system/build.prop"), contents).unwrap();
}

// PatcherContext tests

#[test]
fn PatcherContext___new___borrows_config_and_info() {
    let config = PatcherConfig::default();
    let info = FileInfo::new("rom.zip", PartConfig::new("dual", "Dual Boot"));

    let ctx = PatcherContext::new(&config, &info);

    assert_eq!(ctx.info().part_config().id(), "dual");
    assert_eq!(ctx.config().part_configs.len(), 4);
}

// AutoPatcher trait tests

#[test]
fn AutoPatcher___new_files___defaults_to_empty() {
    assert!(StampPatcher.new_files().is_empty());
}

#[test]
fn AutoPatcher___error___defaults_to_none() {
    assert!(StampPatcher.error().is_none());
}

#[test]
fn AutoPatcher___patch_files___uses_context_part_config() {
    let dir = tempfile::tempdir().unwrap();
    write_build_prop(dir.path(), "ro.build.version=1\n");
    let config = PatcherConfig::default();
    let info = FileInfo::new("rom.zip", PartConfig::new("secondary", "Secondary"));
    let ctx = PatcherContext::new(&config, &info);

    StampPatcher.patch_files(&ctx, dir.path(), &[]).unwrap();

    let contents = std::fs::read_to_string(dir.path().join("system/build.prop")).unwrap();
    assert_eq!(contents, "ro.build.version=1\nro.stamp=secondary\n");
}

#[test]
fn AutoPatcher___boxed___dispatches_through_trait_object() {
    let patchers: Vec<Box<dyn AutoPatcher>> = vec![Box::new(StampPatcher)];

    let ids: Vec<&str> = patchers.iter().map(|p| p.id()).collect();

    assert_eq!(ids, vec!["StampPatcher"]);
}

// check_existing_files tests

#[test]
fn check_existing_files___all_present___succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_build_prop(dir.path(), "");

    let result = check_existing_files(&StampPatcher, dir.path());

    assert!(result.is_ok());
}

#[test]
fn check_existing_files___missing___returns_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = check_existing_files(&StampPatcher, dir.path());

    assert_eq!(
        result.unwrap_err(),
        PatcherError::MissingFile("system/build.prop".into())
    );
}

#[test]
fn check_existing_files___directory_in_place_of_file___returns_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("system/build.prop")).unwrap();

    let result = check_existing_files(&StampPatcher, dir.path());

    assert!(matches!(result, Err(PatcherError::MissingFile(_))));
}
