//! Autopatcher trait and context types

use crate::{FileInfo, PatcherConfig, PatcherError, PatcherResult};
use std::path::{Path, PathBuf};

/// Read-only context for one patch job
///
/// Owned data lives with the caller; autopatchers only borrow it for the
/// duration of [`AutoPatcher::patch_files`].
#[derive(Debug, Clone, Copy)]
pub struct PatcherContext<'a> {
    /// Global configuration
    pub config: &'a PatcherConfig,
    /// Metadata for the archive being patched
    pub info: &'a FileInfo,
}

impl<'a> PatcherContext<'a> {
    /// Create a new patcher context
    pub fn new(config: &'a PatcherConfig, info: &'a FileInfo) -> Self {
        Self { config, info }
    }

    /// Global configuration
    pub fn config(&self) -> &'a PatcherConfig {
        self.config
    }

    /// Metadata for the archive being patched
    pub fn info(&self) -> &'a FileInfo {
        self.info
    }
}

/// Main trait for implementing autopatchers
///
/// An autopatcher declares which files inside an extracted archive it
/// creates or modifies, then edits them in place.
///
/// # Example
///
/// ```ignore
/// use dbp_core::prelude::*;
///
/// struct StampPatcher;
///
/// impl AutoPatcher for StampPatcher {
///     fn id(&self) -> &str {
///         "StampPatcher"
///     }
///
///     fn existing_files(&self) -> Vec<String> {
///         vec!["system/build.prop".to_string()]
///     }
///
///     fn patch_files(
///         &self,
///         ctx: &PatcherContext<'_>,
///         directory: &Path,
///         _boot_images: &[PathBuf],
///     ) -> PatcherResult<()> {
///         let line = format!("ro.stamp={}\n", ctx.info().part_config().id());
///         dbp_core::fileutils::append_to_file(&directory.join("system/build.prop"), line.as_bytes())
///     }
/// }
/// ```
pub trait AutoPatcher: Send + Sync {
    /// Stable, unique identifier used for selection and error attribution
    fn id(&self) -> &str;

    /// Paths, relative to the patch directory, this patcher creates
    fn new_files(&self) -> Vec<String> {
        Vec::new()
    }

    /// Paths, relative to the patch directory, that must already exist
    ///
    /// The caller guarantees these are present before calling
    /// [`patch_files`](Self::patch_files).
    fn existing_files(&self) -> Vec<String>;

    /// Apply this patcher's edits to the files under `directory`
    ///
    /// `boot_images` lists boot image paths for patchers that modify them.
    /// Appending patchers are not idempotent: running one twice on the
    /// same directory appends twice.
    fn patch_files(
        &self,
        ctx: &PatcherContext<'_>,
        directory: &Path,
        boot_images: &[PathBuf],
    ) -> PatcherResult<()>;

    /// The error recorded by the last failed [`patch_files`](Self::patch_files) call
    fn error(&self) -> Option<PatcherError> {
        None
    }
}

/// Check that every file `patcher` declares in [`AutoPatcher::existing_files`]
/// is present under `directory`
pub fn check_existing_files(patcher: &dyn AutoPatcher, directory: &Path) -> PatcherResult<()> {
    for file in patcher.existing_files() {
        if !directory.join(&file).is_file() {
            tracing::warn!(patcher = patcher.id(), file = %file, "Required file is missing");
            return Err(PatcherError::MissingFile(file));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "patcher/patcher_tests.rs"]
mod patcher_tests;
