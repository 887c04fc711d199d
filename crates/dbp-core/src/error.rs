//! Error types for dbp autopatchers

use thiserror::Error;

/// Result type alias for patcher operations
pub type PatcherResult<T> = Result<T, PatcherError>;

/// Error type for patcher operations
///
/// Every payload is a plain string so the error can be cloned into a
/// patcher's recorded error state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatcherError {
    /// A file could not be opened
    #[error("failed to open {path}: {message}")]
    FileOpenError { path: String, message: String },

    /// A file was opened but reading it failed
    #[error("failed to read {path}: {message}")]
    FileReadError { path: String, message: String },

    /// Writing a file failed
    #[error("failed to write {path}: {message}")]
    FileWriteError { path: String, message: String },

    /// A file the patcher requires is not present in the patch directory
    #[error("required file is missing: {0}")]
    MissingFile(String),

    /// No autopatcher is registered under this identifier
    #[error("unknown autopatcher: {0}")]
    UnknownPatcher(String),

    /// No partition configuration has this identifier
    #[error("unknown partition configuration: {0}")]
    UnknownPartConfig(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl PatcherError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            PatcherError::FileOpenError { .. } => 1,
            PatcherError::FileReadError { .. } => 2,
            PatcherError::FileWriteError { .. } => 3,
            PatcherError::MissingFile(_) => 4,
            PatcherError::UnknownPatcher(_) => 5,
            PatcherError::UnknownPartConfig(_) => 6,
            PatcherError::ConfigError(_) => 7,
            PatcherError::Internal(_) => 8,
        }
    }

    /// Returns true for failures of the underlying file primitives
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            PatcherError::FileOpenError { .. }
                | PatcherError::FileReadError { .. }
                | PatcherError::FileWriteError { .. }
        )
    }
}

impl From<serde_json::Error> for PatcherError {
    fn from(err: serde_json::Error) -> Self {
        PatcherError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for PatcherError {
    fn from(err: toml::de::Error) -> Self {
        PatcherError::ConfigError(err.to_string())
    }
}
