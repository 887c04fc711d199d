//! dbp-autopatchers - Autopatcher plugins for extracted ROM update packages
//!
//! This crate provides:
//! - [`NoobdevMultiBoot`] which strips a ROM's built-in dual boot support from
//!   its installer script and disables it in `dualboot.sh`
//! - [`NoobdevSystemProp`] which stamps `build.prop` with the target
//!   partition configuration
//! - [`lines`] for per-line rewriting of text files
//! - [`registry`] for constructing autopatchers by identifier
//!
//! # Example
//!
//! ```no_run
//! use dbp_autopatchers::registry;
//! use dbp_core::{FileInfo, PatcherConfig, PatcherContext};
//! use std::path::Path;
//!
//! let config = PatcherConfig::default();
//! let part_config = config.require_part_config("dual")?.clone();
//! let info = FileInfo::new("rom.zip", part_config);
//! let ctx = PatcherContext::new(&config, &info);
//!
//! for patcher in registry::create_autopatchers(registry::autopatcher_ids())? {
//!     patcher.patch_files(&ctx, Path::new("/tmp/rom"), &[])?;
//! }
//! # Ok::<(), dbp_core::PatcherError>(())
//! ```

pub mod lines;
pub mod registry;

mod noobdev;

pub use noobdev::{NoobdevMultiBoot, NoobdevSystemProp};
pub use registry::{autopatcher_ids, create_autopatcher, create_autopatchers};
