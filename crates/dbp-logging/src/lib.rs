//! dbp-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] which installs a formatting subscriber on stderr
//! - [`ReloadHandle`] for changing the log level after initialization

mod reload;
mod subscriber;

pub use dbp_core::LogLevel;
pub use reload::ReloadHandle;
pub use subscriber::{init_logging, init_logging_from_config};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging, init_logging_from_config};
}
