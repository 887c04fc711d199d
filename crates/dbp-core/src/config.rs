//! Patcher configuration types

use crate::{PatcherError, PatcherResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration shared by every autopatcher in a patch job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatcherConfig {
    /// Directory holding patcher data files (scripts, binaries)
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,

    /// Scratch directory for extracted archives
    #[serde(default = "default_temp_directory")]
    pub temp_directory: PathBuf,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Known partition configurations
    #[serde(default = "default_part_configs")]
    pub part_configs: Vec<PartConfig>,
}

/// A target partition layout that a patch job customizes for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartConfig {
    /// Identifier stamped into patched files (e.g. "dual")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Longer description of where the ROM gets installed
    #[serde(default)]
    pub description: String,

    /// Location the patched kernel is installed to
    #[serde(default)]
    pub kernel: String,
}

impl PartConfig {
    /// Create a new partition configuration
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kernel: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the kernel location
    pub fn with_kernel(mut self, kernel: impl Into<String>) -> Self {
        self.kernel = kernel.into();
        self
    }

    /// The partition-configuration identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

fn default_data_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_temp_directory() -> PathBuf {
    std::env::temp_dir()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_part_configs() -> Vec<PartConfig> {
    let mut configs = vec![
        PartConfig::new("dual", "Dual Boot")
            .with_description("Second ROM installed to /system/dual, /cache/dual, /data/dual")
            .with_kernel("secondary"),
    ];
    for slot in 1..=3 {
        let id = format!("multi-slot-{slot}");
        configs.push(
            PartConfig::new(id.clone(), format!("Multi Boot Slot {slot}"))
                .with_description(format!(
                    "ROM installed to /cache/{id}/system, /cache/{id}/cache, /data/{id}"
                ))
                .with_kernel(id),
        );
    }
    configs
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            temp_directory: default_temp_directory(),
            log_level: default_log_level(),
            part_configs: default_part_configs(),
        }
    }
}

impl PatcherConfig {
    /// Create a configuration with built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> PatcherResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(text: &str) -> PatcherResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file, choosing the format by extension
    ///
    /// `.json` files are parsed as JSON; everything else as TOML.
    pub fn load(path: &Path) -> PatcherResult<Self> {
        let bytes = crate::fileutils::read_to_memory(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&bytes)?
        } else {
            let text = String::from_utf8(bytes).map_err(|e| {
                PatcherError::ConfigError(format!("{} is not UTF-8: {}", path.display(), e))
            })?;
            Self::from_toml(&text)?
        };

        tracing::debug!(
            path = %path.display(),
            part_configs = config.part_configs.len(),
            "Loaded patcher configuration"
        );
        Ok(config)
    }

    /// Look up a partition configuration by identifier
    pub fn part_config(&self, id: &str) -> Option<&PartConfig> {
        self.part_configs.iter().find(|pc| pc.id == id)
    }

    /// Look up a partition configuration, failing if it is unknown
    pub fn require_part_config(&self, id: &str) -> PatcherResult<&PartConfig> {
        self.part_config(id)
            .ok_or_else(|| PatcherError::UnknownPartConfig(id.to_string()))
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
