//! Patch command implementation

use anyhow::{Context, Result};
use dbp_autopatchers::registry;
use dbp_core::{FileInfo, PatcherConfig, PatcherContext, check_existing_files};
use std::path::{Path, PathBuf};

/// Everything the patch command needs besides configuration
#[derive(Debug, Clone)]
pub struct PatchRequest {
    /// Extracted ROM directory
    pub directory: PathBuf,
    /// Partition configuration identifier
    pub part_config_id: String,
    /// Autopatchers to apply in order; empty means all
    pub patchers: Vec<String>,
    /// Boot images handed to each autopatcher
    pub boot_images: Vec<PathBuf>,
    /// Original archive, recorded in the file info
    pub archive: Option<PathBuf>,
}

/// Load configuration from `path`, or the built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<PatcherConfig> {
    match path {
        Some(path) => PatcherConfig::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(PatcherConfig::default()),
    }
}

/// Run the patch command, returning the identifiers that were applied
///
/// Required files for every selected autopatcher are checked before any
/// file is touched. A failing autopatcher stops the run; edits made by
/// earlier autopatchers stay on disk.
pub fn run(config: &PatcherConfig, request: &PatchRequest) -> Result<Vec<String>> {
    if !request.directory.is_dir() {
        anyhow::bail!("Not a directory: {}", request.directory.display());
    }

    let part_config = config.require_part_config(&request.part_config_id)?.clone();
    let archive = request
        .archive
        .clone()
        .unwrap_or_else(|| request.directory.clone());
    let info = FileInfo::new(archive, part_config);
    let ctx = PatcherContext::new(config, &info);

    let patchers = if request.patchers.is_empty() {
        registry::create_autopatchers(registry::autopatcher_ids())?
    } else {
        registry::create_autopatchers(request.patchers.as_slice())?
    };

    for patcher in &patchers {
        check_existing_files(patcher.as_ref(), &request.directory)
            .with_context(|| format!("{} cannot run", patcher.id()))?;
    }

    println!(
        "Patching {} for {}",
        request.directory.display(),
        info.part_config().id()
    );

    let mut applied = Vec::with_capacity(patchers.len());
    for patcher in &patchers {
        patcher
            .patch_files(&ctx, &request.directory, &request.boot_images)
            .with_context(|| format!("{} failed", patcher.id()))?;
        println!("✓ {}", patcher.id());
        applied.push(patcher.id().to_string());
    }

    tracing::info!(count = applied.len(), "Applied autopatchers");
    Ok(applied)
}
