//! Per-archive metadata for a patch job

use crate::PartConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Information about the archive being patched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Path of the original (unpatched) archive
    pub filename: PathBuf,

    /// Partition configuration the job targets
    pub part_config: PartConfig,

    /// Device codename, when known
    #[serde(default)]
    pub device: Option<String>,
}

impl FileInfo {
    /// Create file info for an archive and target partition configuration
    pub fn new(filename: impl Into<PathBuf>, part_config: PartConfig) -> Self {
        Self {
            filename: filename.into(),
            part_config,
            device: None,
        }
    }

    /// Set the device codename
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Path of the original archive
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Partition configuration the job targets
    pub fn part_config(&self) -> &PartConfig {
        &self.part_config
    }
}

#[cfg(test)]
#[path = "fileinfo/fileinfo_tests.rs"]
mod fileinfo_tests;
