//! Whole-file read/write primitives
//!
//! Files are always read in full and written in full. There is no streaming
//! and no partial-write contract beyond a full overwrite.

use crate::{PatcherError, PatcherResult};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read the entire contents of `path` into memory
pub fn read_to_memory(path: &Path) -> PatcherResult<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| PatcherError::FileOpenError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| PatcherError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::trace!(path = %path.display(), size = contents.len(), "Read file");
    Ok(contents)
}

/// Replace the contents of `path` with `contents`, creating it if needed
pub fn write_from_memory(path: &Path, contents: &[u8]) -> PatcherResult<()> {
    let mut file = File::create(path).map_err(|e| PatcherError::FileOpenError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| PatcherError::FileWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::trace!(path = %path.display(), size = contents.len(), "Wrote file");
    Ok(())
}

/// Append `suffix` to the end of `path` with a read-modify-write cycle
///
/// No check is made for an existing copy of `suffix`; calling this twice
/// appends it twice.
pub fn append_to_file(path: &Path, suffix: &[u8]) -> PatcherResult<()> {
    let mut contents = read_to_memory(path)?;
    contents.extend_from_slice(suffix);
    write_from_memory(path, &contents)
}

#[cfg(test)]
#[path = "fileutils/fileutils_tests.rs"]
mod fileutils_tests;
