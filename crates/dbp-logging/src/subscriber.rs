//! Global subscriber initialization

use crate::ReloadHandle;
use crate::reload::convert_level_to_filter;
use dbp_core::{LogLevel, PatcherConfig};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Initialize logging to stderr at `level`
///
/// When `RUST_LOG` is set it takes precedence: the level filter is opened
/// fully and the environment filter decides. Returns `false` if a global
/// subscriber was already installed, in which case nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let initial = if env_filter.is_some() {
        LevelFilter::TRACE
    } else {
        convert_level_to_filter(level)
    };

    let (level_layer, handle) = reload::Layer::new(initial);

    let subscriber = tracing_subscriber::registry()
        .with(level_layer)
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle);
    true
}

/// Initialize logging at the level named in `config`
///
/// Unrecognized level names fall back to [`LogLevel::Info`].
pub fn init_logging_from_config(config: &PatcherConfig) -> bool {
    let level = LogLevel::from_name(&config.log_level).unwrap_or(LogLevel::Info);
    let installed = init_logging(level);
    if installed && LogLevel::from_name(&config.log_level).is_none() {
        tracing::warn!(log_level = %config.log_level, "Unknown log level, using info");
    }
    installed
}

#[cfg(test)]
#[path = "subscriber/subscriber_tests.rs"]
mod subscriber_tests;
