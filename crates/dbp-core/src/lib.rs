//! dbp-core - Core traits, types, and file primitives
//!
//! This crate provides the foundational types for building dbp autopatchers:
//! - [`AutoPatcher`] trait for implementing patch plugins
//! - [`PatcherContext`] for the read-only per-job context
//! - [`PatcherError`] for error handling
//! - [`PatcherConfig`] for global configuration
//! - [`fileutils`] for whole-file read/write primitives

mod config;
mod error;
mod fileinfo;
mod patcher;

pub mod fileutils;

pub use config::{PartConfig, PatcherConfig};
pub use error::{PatcherError, PatcherResult};
pub use fileinfo::FileInfo;
pub use patcher::{AutoPatcher, PatcherContext, check_existing_files};

/// Log levels understood by the logging layer and configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name as written in configuration files
    ///
    /// Matching is case-insensitive; unrecognized names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AutoPatcher, FileInfo, LogLevel, PartConfig, PatcherConfig, PatcherContext, PatcherError,
        PatcherResult,
    };
}
