//! Autopatchers for ROMs that ship their own dual boot support
//!
//! These ROMs install a `dualboot.sh` helper and call it from the installer
//! script to switch between a primary and a secondary ROM. Installing such a
//! ROM into another slot requires removing those calls and making the helper
//! report that dual boot is disabled.

use crate::lines::{self, LineRule};
use dbp_core::fileutils;
use dbp_core::{AutoPatcher, PatcherContext, PatcherError, PatcherResult};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

pub(crate) const UPDATER_SCRIPT: &str = "META-INF/com/google/android/updater-script";
pub(crate) const DUALBOOT_SH: &str = "dualboot.sh";
pub(crate) const BUILD_PROP: &str = "system/build.prop";

/// No-op statement that keeps an `if` body non-empty for update-binary
const PRINT_EMPTY: &str = "ui_print(\"\");";

const NO_DUAL_BOOT: &[u8] = b"echo 'ro.dualboot=0' > /tmp/dualboot.prop\n";

const PATCHED_PROP: &str = "ro.chenxiaolong.patched";

/// Checked in order; the first match wins
const UPDATER_SCRIPT_RULES: &[LineRule] = &[
    LineRule::delete("system/bin/dualboot.sh"),
    LineRule::replace("boot installation is", PRINT_EMPTY),
    LineRule::replace("set-secondary", PRINT_EMPTY),
];

/// State shared by the noobdev autopatchers
#[derive(Default)]
struct NoobdevBase {
    last_error: Mutex<Option<PatcherError>>,
}

impl NoobdevBase {
    /// Record the outcome of a `patch_files` call and pass it through
    fn record(&self, id: &str, result: PatcherResult<()>) -> PatcherResult<()> {
        let mut last_error = self.last_error.lock();
        match &result {
            Ok(()) => {
                tracing::info!(patcher = id, "Finished patching files");
                *last_error = None;
            }
            Err(e) => {
                tracing::error!(patcher = id, error = %e, "Failed to patch files");
                *last_error = Some(e.clone());
            }
        }
        result
    }

    fn error(&self) -> Option<PatcherError> {
        self.last_error.lock().clone()
    }
}

/// Strip a ROM's built-in dual boot handling
///
/// Removes calls to `dualboot.sh` from the installer script, blanks the
/// "boot installation is ..." messages and `set-secondary` statements, and
/// makes `dualboot.sh` write `ro.dualboot=0`.
#[derive(Default)]
pub struct NoobdevMultiBoot {
    base: NoobdevBase,
}

impl NoobdevMultiBoot {
    pub const ID: &'static str = "NoobdevMultiBoot";

    pub fn new() -> Self {
        Self::default()
    }

    fn patch_updater_script(&self, directory: &Path) -> PatcherResult<()> {
        let path = directory.join(UPDATER_SCRIPT);
        let contents = fileutils::read_to_memory(&path)?;

        let (patched, stats) = lines::rewrite_with_rules(&contents, UPDATER_SCRIPT_RULES);
        tracing::debug!(
            file = UPDATER_SCRIPT,
            deleted = stats.deleted,
            replaced = stats.replaced,
            "Rewrote installer script"
        );

        fileutils::write_from_memory(&path, &patched)
    }

    fn patch_dualboot_sh(&self, directory: &Path) -> PatcherResult<()> {
        tracing::debug!(file = DUALBOOT_SH, "Disabling built-in dual boot");
        fileutils::append_to_file(&directory.join(DUALBOOT_SH), NO_DUAL_BOOT)
    }
}

impl AutoPatcher for NoobdevMultiBoot {
    fn id(&self) -> &str {
        Self::ID
    }

    fn existing_files(&self) -> Vec<String> {
        vec![UPDATER_SCRIPT.to_string(), DUALBOOT_SH.to_string()]
    }

    fn patch_files(
        &self,
        _ctx: &PatcherContext<'_>,
        directory: &Path,
        _boot_images: &[PathBuf],
    ) -> PatcherResult<()> {
        tracing::info!(patcher = Self::ID, directory = %directory.display(), "Patching files");

        let result = self
            .patch_updater_script(directory)
            .and_then(|()| self.patch_dualboot_sh(directory));
        self.base.record(Self::ID, result)
    }

    fn error(&self) -> Option<PatcherError> {
        self.base.error()
    }
}

/// Mark `build.prop` as patched for the target partition configuration
///
/// The ROM's updater checks `ro.chenxiaolong.patched` to decide whether an
/// update needs patching before it is installed.
#[derive(Default)]
pub struct NoobdevSystemProp {
    base: NoobdevBase,
}

impl NoobdevSystemProp {
    pub const ID: &'static str = "NoobdevSystemProp";

    pub fn new() -> Self {
        Self::default()
    }

    /// The property line appended for `part_config_id`
    pub fn patched_prop_line(part_config_id: &str) -> String {
        format!("{PATCHED_PROP}={part_config_id}\n")
    }
}

impl AutoPatcher for NoobdevSystemProp {
    fn id(&self) -> &str {
        Self::ID
    }

    fn existing_files(&self) -> Vec<String> {
        vec![BUILD_PROP.to_string()]
    }

    fn patch_files(
        &self,
        ctx: &PatcherContext<'_>,
        directory: &Path,
        _boot_images: &[PathBuf],
    ) -> PatcherResult<()> {
        let part_config_id = ctx.info().part_config().id();
        tracing::info!(
            patcher = Self::ID,
            directory = %directory.display(),
            part_config = part_config_id,
            "Patching files"
        );

        let prop = Self::patched_prop_line(part_config_id);
        let result = fileutils::append_to_file(&directory.join(BUILD_PROP), prop.as_bytes());
        self.base.record(Self::ID, result)
    }

    fn error(&self) -> Option<PatcherError> {
        self.base.error()
    }
}
